//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod consultation;
pub mod medical_record;
pub mod patient;
pub mod professional;
pub mod user;

pub use consultation::Entity as ConsultationEntity;
pub use medical_record::Entity as MedicalRecordEntity;
pub use patient::Entity as PatientEntity;
pub use professional::Entity as ProfessionalEntity;
pub use user::Entity as UserEntity;
