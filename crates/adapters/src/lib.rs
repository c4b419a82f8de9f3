//! HTTP adapter for the fruit repository
//!
//! This crate maps the `/fruits` HTTP surface onto a [`FruitRepository`]
//! shared through [`AppState`], and translates every domain error into a
//! single status code with a JSON error body.
//!
//! [`FruitRepository`]: fruitstand_store::FruitRepository

pub mod error;
pub mod handlers;
pub mod http_server;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use http_server::{HttpServer, ServerConfig};
pub use router::build_router;
pub use state::AppState;
