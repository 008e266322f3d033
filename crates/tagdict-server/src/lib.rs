//! # tagdict-server
//!
//! Read-only HTTP API over the tag translation database.
//!
//! This crate provides the axum application behind the converter page:
//! - Single-file static serving of `converter.html`
//! - `/api/get_data` combining the tag and threshold tables into one payload
//! - Permissive CORS so the page can call the API from any origin

pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
