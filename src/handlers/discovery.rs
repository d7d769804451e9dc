use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use super::view_error_response;
use crate::AppState;

pub async fn shuffle_discovery(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match state.view_service.shuffle(path.into_inner()).await {
        Ok(dispatched) => Ok(HttpResponse::Accepted().json(dispatched.snapshot)),
        Err(e) => Ok(view_error_response(e)),
    }
}
