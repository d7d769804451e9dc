pub mod api;
pub mod book;
pub mod navigation;

pub use api::*;
pub use book::*;
pub use navigation::*;
