//! Service Container - Centralized service access.
//!
//! Builds every service over one shared unit of work and hands them out as
//! trait objects.

use std::sync::Arc;

use super::{
    AuthService, ConsultationService, MedicalRecordService, PatientService, ProfessionalService,
    TokenService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn patients(&self) -> Arc<dyn PatientService>;

    fn professionals(&self) -> Arc<dyn ProfessionalService>;

    fn consultations(&self) -> Arc<dyn ConsultationService>;

    fn medical_records(&self) -> Arc<dyn MedicalRecordService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    patient_service: Arc<dyn PatientService>,
    professional_service: Arc<dyn ProfessionalService>,
    consultation_service: Arc<dyn ConsultationService>,
    medical_record_service: Arc<dyn MedicalRecordService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        use super::{
            Authenticator, ConsultationManager, MedicalRecordManager, PatientManager,
            ProfessionalManager,
        };

        let uow = Arc::new(Persistence::new(db));
        let tokens = TokenService::from_config(config)?;

        Ok(Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), tokens)),
            patient_service: Arc::new(PatientManager::new(uow.clone())),
            professional_service: Arc::new(ProfessionalManager::new(uow.clone())),
            consultation_service: Arc::new(ConsultationManager::new(uow.clone())),
            medical_record_service: Arc::new(MedicalRecordManager::new(uow)),
        })
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn patients(&self) -> Arc<dyn PatientService> {
        self.patient_service.clone()
    }

    fn professionals(&self) -> Arc<dyn ProfessionalService> {
        self.professional_service.clone()
    }

    fn consultations(&self) -> Arc<dyn ConsultationService> {
        self.consultation_service.clone()
    }

    fn medical_records(&self) -> Arc<dyn MedicalRecordService> {
        self.medical_record_service.clone()
    }
}
