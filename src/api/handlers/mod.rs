//! HTTP request handlers.

pub mod auth_handler;
pub mod consultation_handler;
pub mod medical_record_handler;
pub mod patient_handler;
pub mod professional_handler;

pub use auth_handler::{auth_routes, me_routes};
pub use consultation_handler::consultation_routes;
pub use medical_record_handler::medical_record_routes;
pub use patient_handler::patient_routes;
pub use professional_handler::professional_routes;
