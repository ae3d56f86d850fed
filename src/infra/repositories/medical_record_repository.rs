//! Medical record repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{MedicalRecord, PatientRecordEntry};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Medical record repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    /// Find the record attached to a consultation
    async fn find_by_consultation(&self, consultation_id: i32) -> AppResult<Option<MedicalRecord>>;

    /// Consultations of a patient that have a record, joined with the notes
    async fn list_for_patient(&self, patient_id: i32) -> AppResult<Vec<PatientRecordEntry>>;
}

pub struct MedicalRecordStore {
    db: DatabaseConnection,
}

impl MedicalRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicalRecordRepository for MedicalRecordStore {
    async fn find_by_consultation(&self, consultation_id: i32) -> AppResult<Option<MedicalRecord>> {
        query::find_by_consultation(&self.db, consultation_id).await
    }

    async fn list_for_patient(&self, patient_id: i32) -> AppResult<Vec<PatientRecordEntry>> {
        query::list_for_patient(&self.db, patient_id).await
    }
}

pub(crate) mod query {
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
        QueryOrder, Set,
    };

    use super::super::base::map_write_error;
    use super::super::entities::{
        consultation,
        medical_record::{self, ActiveModel},
        ConsultationEntity, MedicalRecordEntity,
    };
    use crate::config::MSG_DUPLICATE_RECORD;
    use crate::domain::{Consultation, MedicalRecord, NewMedicalRecord, PatientRecordEntry};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_consultation<C: ConnectionTrait>(
        db: &C,
        consultation_id: i32,
    ) -> AppResult<Option<MedicalRecord>> {
        let result = MedicalRecordEntity::find()
            .filter(medical_record::Column::ConsultationId.eq(consultation_id))
            .one(db)
            .await?;
        Ok(result.map(MedicalRecord::from))
    }

    pub(crate) async fn insert<C: ConnectionTrait>(
        db: &C,
        new_record: NewMedicalRecord,
    ) -> AppResult<MedicalRecord> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            consultation_id: Set(new_record.consultation_id),
            notes: Set(new_record.notes),
        };

        let model = active_model
            .insert(db)
            .await
            .map_err(|e| map_write_error(e, AppError::DuplicateRecord(MSG_DUPLICATE_RECORD)))?;
        Ok(MedicalRecord::from(model))
    }

    /// Left-join consultations with their record and keep only those that have one.
    pub(crate) async fn list_for_patient<C: ConnectionTrait>(
        db: &C,
        patient_id: i32,
    ) -> AppResult<Vec<PatientRecordEntry>> {
        let rows = ConsultationEntity::find()
            .filter(consultation::Column::PatientId.eq(patient_id))
            .find_also_related(MedicalRecordEntity)
            .order_by_asc(consultation::Column::Id)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(consultation, record)| {
                record.map(|record| {
                    PatientRecordEntry::new(
                        Consultation::from(consultation),
                        MedicalRecord::from(record),
                    )
                })
            })
            .collect())
    }
}
