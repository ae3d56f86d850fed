//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the `UnitOfWork` abstraction
//! for repository access and transactions.

mod auth_service;
mod consultation_service;
pub mod container;
mod medical_record_service;
mod patient_service;
mod professional_service;
mod token_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use consultation_service::{ConsultationManager, ConsultationService};
pub use medical_record_service::{MedicalRecordManager, MedicalRecordService};
pub use patient_service::{PatientManager, PatientService};
pub use professional_service::{ProfessionalManager, ProfessionalService};
pub use token_service::{Claims, TokenService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

#[cfg(test)]
pub(crate) mod test_support {
    //! Unit of work over mock repositories.

    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::errors::{AppError, AppResult};
    use crate::infra::{
        ConsultationRepository, MedicalRecordRepository, MockConsultationRepository,
        MockMedicalRecordRepository, MockPatientRepository, MockProfessionalRepository,
        MockUserRepository, PatientRepository, ProfessionalRepository, TransactionContext,
        UnitOfWork, UserRepository,
    };

    /// Repositories without expectations panic when called.
    #[derive(Default)]
    pub(crate) struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        patients: Arc<MockPatientRepository>,
        professionals: Arc<MockProfessionalRepository>,
        consultations: Arc<MockConsultationRepository>,
        medical_records: Arc<MockMedicalRecordRepository>,
    }

    impl TestUnitOfWork {
        pub(crate) fn with_users(users: MockUserRepository) -> Self {
            Self {
                users: Arc::new(users),
                ..Default::default()
            }
        }

        pub(crate) fn with_patients(patients: MockPatientRepository) -> Self {
            Self {
                patients: Arc::new(patients),
                ..Default::default()
            }
        }

        pub(crate) fn with_professionals(professionals: MockProfessionalRepository) -> Self {
            Self {
                professionals: Arc::new(professionals),
                ..Default::default()
            }
        }

        pub(crate) fn with_consultations(consultations: MockConsultationRepository) -> Self {
            Self {
                consultations: Arc::new(consultations),
                ..Default::default()
            }
        }

        pub(crate) fn and_medical_records(mut self, records: MockMedicalRecordRepository) -> Self {
            self.medical_records = Arc::new(records);
            self
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn patients(&self) -> Arc<dyn PatientRepository> {
            self.patients.clone()
        }

        fn professionals(&self) -> Arc<dyn ProfessionalRepository> {
            self.professionals.clone()
        }

        fn consultations(&self) -> Arc<dyn ConsultationRepository> {
            self.consultations.clone()
        }

        fn medical_records(&self) -> Arc<dyn MedicalRecordRepository> {
            self.medical_records.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            // Transactional paths are covered by the SQLite integration tests
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }
}
