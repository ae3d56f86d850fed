//! API layer - HTTP handlers and middleware
//!
//! Handlers, the bearer-token guard, the validated JSON extractor and the
//! routing table that ties them to the services in [`AppState`].

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
