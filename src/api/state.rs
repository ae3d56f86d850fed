//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{
    AuthService, ConsultationService, MedicalRecordService, PatientService, ProfessionalService,
    ServiceContainer, Services,
};

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub patient_service: Arc<dyn PatientService>,
    pub professional_service: Arc<dyn ProfessionalService>,
    pub consultation_service: Arc<dyn ConsultationService>,
    pub medical_record_service: Arc<dyn MedicalRecordService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build all services over the given database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let container = Services::from_connection(database.get_connection(), config)?;
        Ok(Self::new(&container, database))
    }

    /// Create state from any service container.
    pub fn new(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            patient_service: container.patients(),
            professional_service: container.professionals(),
            consultation_service: container.consultations(),
            medical_record_service: container.medical_records(),
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockServiceContainer;

    #[tokio::test]
    async fn test_new_takes_each_service_once() {
        let config = Config::new("sqlite::memory:", "0123456789abcdef0123456789abcdef").unwrap();
        let database = Arc::new(Database::connect(&config).await.unwrap());
        let real = Arc::new(Services::from_connection(database.get_connection(), &config).unwrap());

        let mut container = MockServiceContainer::new();
        let services = real.clone();
        container.expect_auth().times(1).returning(move || services.auth());
        let services = real.clone();
        container.expect_patients().times(1).returning(move || services.patients());
        let services = real.clone();
        container
            .expect_professionals()
            .times(1)
            .returning(move || services.professionals());
        let services = real.clone();
        container
            .expect_consultations()
            .times(1)
            .returning(move || services.consultations());
        let services = real;
        container
            .expect_medical_records()
            .times(1)
            .returning(move || services.medical_records());

        let state = AppState::new(&container, database);
        assert!(state.database.ping().await.is_ok());
        assert!(state.patient_service.list().await.unwrap().is_empty());
    }
}
