pub mod books_client;
pub mod discovery;
pub mod home_view;
pub mod presentation;
pub mod query_validator;
pub mod view_service;

pub use books_client::*;
pub use discovery::*;
pub use home_view::*;
pub use view_service::*;
