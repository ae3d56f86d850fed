//! Clinic Records - a clinical-records backend.
//!
//! Users register and log in to obtain a time-limited bearer token; with it
//! they register patients and health professionals, schedule consultations
//! and attach one medical record to each consultation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities, password hashing and input parsing
//! - **services**: Use cases, token issuing and validation
//! - **infra**: Database, migrations, repositories and the unit of work
//! - **api**: HTTP handlers, access guard and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! JWT_SECRET=... cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
