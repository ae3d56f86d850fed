//! Consultation service.
//!
//! A consultation references a patient and a professional. Both are looked
//! up inside the same transaction as the insert, so a failed check leaves
//! no row behind.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_CONSULTATION_NOT_FOUND, MSG_PATIENT_NOT_FOUND, MSG_PROFESSIONAL_NOT_FOUND};
use crate::domain::{Consultation, NewConsultation};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ConsultationService: Send + Sync {
    async fn create(&self, new_consultation: NewConsultation) -> AppResult<Consultation>;

    async fn get(&self, id: i32) -> AppResult<Consultation>;
}

pub struct ConsultationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ConsultationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ConsultationService for ConsultationManager<U> {
    async fn create(&self, new_consultation: NewConsultation) -> AppResult<Consultation> {
        let consultation = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    ctx.patients()
                        .find_by_id(new_consultation.patient_id)
                        .await?
                        .ok_or_not_found(MSG_PATIENT_NOT_FOUND)?;
                    ctx.professionals()
                        .find_by_id(new_consultation.professional_id)
                        .await?
                        .ok_or_not_found(MSG_PROFESSIONAL_NOT_FOUND)?;

                    ctx.consultations().create(new_consultation).await
                })
            })
            .await?;

        tracing::info!(consultation_id = consultation.id, "Consultation registered");
        Ok(consultation)
    }

    async fn get(&self, id: i32) -> AppResult<Consultation> {
        self.uow
            .consultations()
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_CONSULTATION_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockConsultationRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_get_missing_consultation() {
        let mut consultations = MockConsultationRepository::new();
        consultations.expect_find_by_id().returning(|_| Ok(None));

        let service =
            ConsultationManager::new(Arc::new(TestUnitOfWork::with_consultations(consultations)));
        let result = service.get(5).await;
        assert!(matches!(
            result,
            Err(AppError::NotFound(MSG_CONSULTATION_NOT_FOUND))
        ));
    }
}
