//! Repository layer - Data access abstraction
//!
//! Each repository exposes a mockable trait backed by a pooled `*Store`.
//! The query functions behind the stores are generic over the connection,
//! so the unit of work reuses them inside transactions.

mod base;
pub(crate) mod entities;
mod consultation_repository;
mod medical_record_repository;
mod patient_repository;
mod professional_repository;
mod user_repository;

pub use consultation_repository::{ConsultationRepository, ConsultationStore};
pub use medical_record_repository::{MedicalRecordRepository, MedicalRecordStore};
pub use patient_repository::{PatientRepository, PatientStore};
pub use professional_repository::{ProfessionalRepository, ProfessionalStore};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use consultation_repository::query as consultation_query;
pub(crate) use medical_record_repository::query as medical_record_query;
pub(crate) use patient_repository::query as patient_query;
pub(crate) use professional_repository::query as professional_query;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use consultation_repository::MockConsultationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use medical_record_repository::MockMedicalRecordRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use patient_repository::MockPatientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use professional_repository::MockProfessionalRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
