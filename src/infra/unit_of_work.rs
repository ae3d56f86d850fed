//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle. Writes
//! that depend on other rows existing (a consultation needs its patient and
//! professional, a record needs its consultation) run their checks and the
//! insert inside one transaction through [`TransactionContext`].
//!
//! Inside a transaction only the context's repositories may be used: with a
//! single-connection pool, touching the pooled stores would wait forever on
//! the connection the transaction holds.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    consultation_query, medical_record_query, patient_query, professional_query,
    ConsultationRepository, ConsultationStore, MedicalRecordRepository, MedicalRecordStore,
    PatientRepository, PatientStore, ProfessionalRepository, ProfessionalStore, UserRepository,
    UserStore,
};
use crate::domain::{
    Consultation, MedicalRecord, NewConsultation, NewMedicalRecord, Patient, Professional,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic transaction methods. Tests
/// implement it over mock repositories instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn patients(&self) -> Arc<dyn PatientRepository>;

    fn professionals(&self) -> Arc<dyn ProfessionalRepository>;

    fn consultations(&self) -> Arc<dyn ConsultationRepository>;

    fn medical_records(&self) -> Arc<dyn MedicalRecordRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn patients(&self) -> TxPatientRepository<'_> {
        TxPatientRepository { txn: self.txn }
    }

    pub fn professionals(&self) -> TxProfessionalRepository<'_> {
        TxProfessionalRepository { txn: self.txn }
    }

    pub fn consultations(&self) -> TxConsultationRepository<'_> {
        TxConsultationRepository { txn: self.txn }
    }

    pub fn medical_records(&self) -> TxMedicalRecordRepository<'_> {
        TxMedicalRecordRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    patient_repo: Arc<PatientStore>,
    professional_repo: Arc<ProfessionalStore>,
    consultation_repo: Arc<ConsultationStore>,
    medical_record_repo: Arc<MedicalRecordStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            patient_repo: Arc::new(PatientStore::new(db.clone())),
            professional_repo: Arc::new(ProfessionalStore::new(db.clone())),
            consultation_repo: Arc::new(ConsultationStore::new(db.clone())),
            medical_record_repo: Arc::new(MedicalRecordStore::new(db.clone())),
            db,
        }
    }

    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn patients(&self) -> Arc<dyn PatientRepository> {
        self.patient_repo.clone()
    }

    fn professionals(&self) -> Arc<dyn ProfessionalRepository> {
        self.professional_repo.clone()
    }

    fn consultations(&self) -> Arc<dyn ConsultationRepository> {
        self.consultation_repo.clone()
    }

    fn medical_records(&self) -> Arc<dyn MedicalRecordRepository> {
        self.medical_record_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }
}

/// Transaction-aware patient lookups.
pub struct TxPatientRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxPatientRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Patient>> {
        patient_query::find_by_id(self.txn, id).await
    }
}

/// Transaction-aware professional lookups.
pub struct TxProfessionalRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxProfessionalRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Professional>> {
        professional_query::find_by_id(self.txn, id).await
    }
}

/// Transaction-aware consultation repository.
pub struct TxConsultationRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxConsultationRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Consultation>> {
        consultation_query::find_by_id(self.txn, id).await
    }

    pub async fn create(&self, new_consultation: NewConsultation) -> AppResult<Consultation> {
        consultation_query::insert(self.txn, new_consultation).await
    }
}

/// Transaction-aware medical record repository.
pub struct TxMedicalRecordRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxMedicalRecordRepository<'a> {
    pub async fn find_by_consultation(
        &self,
        consultation_id: i32,
    ) -> AppResult<Option<MedicalRecord>> {
        medical_record_query::find_by_consultation(self.txn, consultation_id).await
    }

    pub async fn create(&self, new_record: NewMedicalRecord) -> AppResult<MedicalRecord> {
        medical_record_query::insert(self.txn, new_record).await
    }
}
