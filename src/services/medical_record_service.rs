//! Medical record service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_CONSULTATION_NOT_FOUND, MSG_DUPLICATE_RECORD, MSG_PATIENT_NOT_FOUND};
use crate::domain::{MedicalRecord, NewMedicalRecord, PatientRecordEntry};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait MedicalRecordService: Send + Sync {
    /// Attach notes to a consultation that has none yet
    async fn create(&self, new_record: NewMedicalRecord) -> AppResult<MedicalRecord>;

    /// Consultations of a patient that have notes, ordered by consultation id
    async fn list_for_patient(&self, patient_id: i32) -> AppResult<Vec<PatientRecordEntry>>;
}

pub struct MedicalRecordManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MedicalRecordManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MedicalRecordService for MedicalRecordManager<U> {
    async fn create(&self, new_record: NewMedicalRecord) -> AppResult<MedicalRecord> {
        let record = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    ctx.consultations()
                        .find_by_id(new_record.consultation_id)
                        .await?
                        .ok_or_not_found(MSG_CONSULTATION_NOT_FOUND)?;

                    if ctx
                        .medical_records()
                        .find_by_consultation(new_record.consultation_id)
                        .await?
                        .is_some()
                    {
                        return Err(AppError::DuplicateRecord(MSG_DUPLICATE_RECORD));
                    }

                    ctx.medical_records().create(new_record).await
                })
            })
            .await?;

        tracing::info!(
            record_id = record.id,
            consultation_id = record.consultation_id,
            "Medical record registered"
        );
        Ok(record)
    }

    async fn list_for_patient(&self, patient_id: i32) -> AppResult<Vec<PatientRecordEntry>> {
        self.uow
            .patients()
            .find_by_id(patient_id)
            .await?
            .ok_or_not_found(MSG_PATIENT_NOT_FOUND)?;

        self.uow.medical_records().list_for_patient(patient_id).await
    }
}
