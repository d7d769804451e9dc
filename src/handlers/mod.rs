pub mod discovery;
pub mod health;
pub mod navigation;
pub mod search;
pub mod views;

pub use discovery::*;
pub use health::*;
pub use navigation::*;
pub use search::*;
pub use views::*;

use actix_web::HttpResponse;

use crate::error::ViewError;
use crate::models::ErrorResponse;

pub(crate) fn view_error_response(err: ViewError) -> HttpResponse {
    match err {
        ViewError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::with_details("View not found", err.to_string()))
        }
        ViewError::BookNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::with_details("Book not found", err.to_string()))
        }
    }
}
