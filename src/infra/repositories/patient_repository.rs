//! Patient repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{NewPatient, Patient};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Patient repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find patient by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Patient>>;

    /// Find patient by CPF
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Patient>>;

    /// Create a new patient
    async fn create(&self, new_patient: NewPatient) -> AppResult<Patient>;

    /// List all patients in insertion order
    async fn list(&self) -> AppResult<Vec<Patient>>;
}

/// Concrete implementation of PatientRepository
pub struct PatientStore {
    db: DatabaseConnection,
}

impl PatientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientRepository for PatientStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Patient>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Patient>> {
        query::find_by_cpf(&self.db, cpf).await
    }

    async fn create(&self, new_patient: NewPatient) -> AppResult<Patient> {
        query::insert(&self.db, new_patient).await
    }

    async fn list(&self) -> AppResult<Vec<Patient>> {
        query::list(&self.db).await
    }
}

pub(crate) mod query {
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
        QueryOrder, Set,
    };

    use super::super::base::map_write_error;
    use super::super::entities::patient::{self, ActiveModel, Entity as PatientEntity};
    use crate::config::MSG_DUPLICATE_CPF;
    use crate::domain::{NewPatient, Patient};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<Patient>> {
        let result = PatientEntity::find_by_id(id).one(db).await?;
        Ok(result.map(Patient::from))
    }

    pub(crate) async fn find_by_cpf<C: ConnectionTrait>(
        db: &C,
        cpf: &str,
    ) -> AppResult<Option<Patient>> {
        let result = PatientEntity::find()
            .filter(patient::Column::Cpf.eq(cpf))
            .one(db)
            .await?;
        Ok(result.map(Patient::from))
    }

    pub(crate) async fn insert<C: ConnectionTrait>(
        db: &C,
        new_patient: NewPatient,
    ) -> AppResult<Patient> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(new_patient.name),
            cpf: Set(new_patient.cpf),
            birth_date: Set(new_patient.birth_date),
            sex: Set(new_patient.sex),
            phone: Set(new_patient.phone),
            address: Set(new_patient.address),
        };

        let model = active_model
            .insert(db)
            .await
            .map_err(|e| map_write_error(e, AppError::DuplicateRecord(MSG_DUPLICATE_CPF)))?;
        Ok(Patient::from(model))
    }

    pub(crate) async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Patient>> {
        let models = PatientEntity::find()
            .order_by_asc(patient::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Patient::from).collect())
    }
}
