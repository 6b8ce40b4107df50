//! Backend API
//!
//! REST bindings for the food resource, organized by layer.

mod foods;
mod http;

pub use foods::*;
pub use http::HttpClient;
