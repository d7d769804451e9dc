use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;
use validator::Validate;

use super::view_error_response;
use crate::models::{ErrorResponse, KeyPressRequest, QueryInput};
use crate::AppState;

pub async fn update_query(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<QueryInput>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    match state.view_service.set_query(path.into_inner(), req.text).await {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(snapshot)),
        Err(e) => Ok(view_error_response(e)),
    }
}

/// Only Enter submits; every other key is a no-op that still echoes the view.
pub async fn key_down(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<KeyPressRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    match state.view_service.key_down(path.into_inner(), &req.key).await {
        Ok(dispatched) => Ok(HttpResponse::Accepted().json(dispatched.snapshot)),
        Err(e) => Ok(view_error_response(e)),
    }
}

pub async fn submit_search(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match state.view_service.submit(path.into_inner()).await {
        Ok(dispatched) => Ok(HttpResponse::Accepted().json(dispatched.snapshot)),
        Err(e) => Ok(view_error_response(e)),
    }
}
