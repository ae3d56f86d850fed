//! Domain layer - Core entities and value objects
//!
//! Types here know nothing about HTTP or the database; repositories map
//! their rows into these and handlers serialize them out.

pub mod consultation;
pub mod input;
pub mod medical_record;
pub mod password;
pub mod patient;
pub mod professional;
pub mod user;

pub use consultation::{Consultation, NewConsultation};
pub use medical_record::{MedicalRecord, NewMedicalRecord, PatientRecordEntry};
pub use password::Password;
pub use patient::{NewPatient, Patient};
pub use professional::{NewProfessional, Professional};
pub use user::{NewUser, User, UserResponse};
