use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;
use validator::Validate;

use super::view_error_response;
use crate::models::{ErrorResponse, SelectBookRequest};
use crate::AppState;

/// Card click. The payload travels back as route state and is not kept.
pub async fn select_book(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SelectBookRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    match state
        .view_service
        .select(path.into_inner(), req.list, &req.book_id)
        .await
    {
        Ok(navigation) => Ok(HttpResponse::Ok().json(navigation)),
        Err(e) => Ok(view_error_response(e)),
    }
}
