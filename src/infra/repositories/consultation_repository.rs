//! Consultation repository implementation.
//!
//! Creation goes through the unit of work's transaction so the referenced
//! patient and professional are checked in the same session as the insert.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::Consultation;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Consultation repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Consultation>>;
}

pub struct ConsultationStore {
    db: DatabaseConnection,
}

impl ConsultationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConsultationRepository for ConsultationStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Consultation>> {
        query::find_by_id(&self.db, id).await
    }
}

pub(crate) mod query {
    use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, Set};

    use super::super::base::map_write_error;
    use super::super::entities::consultation::{ActiveModel, Entity as ConsultationEntity};
    use crate::domain::{Consultation, NewConsultation};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<Consultation>> {
        let result = ConsultationEntity::find_by_id(id).one(db).await?;
        Ok(result.map(Consultation::from))
    }

    pub(crate) async fn insert<C: ConnectionTrait>(
        db: &C,
        new_consultation: NewConsultation,
    ) -> AppResult<Consultation> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            patient_id: Set(new_consultation.patient_id),
            professional_id: Set(new_consultation.professional_id),
            date: Set(new_consultation.date),
            time: Set(new_consultation.time),
            reason: Set(new_consultation.reason),
        };

        // No unique index on consultations; overlapping slots are allowed
        let model = active_model
            .insert(db)
            .await
            .map_err(|e| map_write_error(e, AppError::internal("unexpected unique violation")))?;
        Ok(Consultation::from(model))
    }
}
