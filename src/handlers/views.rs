use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use super::view_error_response;
use crate::models::CreateViewResponse;
use crate::AppState;

/// Mounting a view kicks off its first discovery fetch in the background.
pub async fn mount_view(state: web::Data<AppState>) -> Result<HttpResponse> {
    let (view_id, dispatched) = state.view_service.mount().await;

    Ok(HttpResponse::Created().json(CreateViewResponse {
        view_id,
        view: dispatched.snapshot,
    }))
}

pub async fn get_view(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    match state.view_service.snapshot(path.into_inner()).await {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(snapshot)),
        Err(e) => Ok(view_error_response(e)),
    }
}

pub async fn unmount_view(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match state.view_service.unmount(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(view_error_response(e)),
    }
}
