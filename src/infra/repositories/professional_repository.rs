//! Health professional repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{NewProfessional, Professional};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Professional repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Professional>>;

    async fn find_by_crm(&self, crm: &str) -> AppResult<Option<Professional>>;

    async fn create(&self, new_professional: NewProfessional) -> AppResult<Professional>;

    /// List all professionals in insertion order
    async fn list(&self) -> AppResult<Vec<Professional>>;
}

pub struct ProfessionalStore {
    db: DatabaseConnection,
}

impl ProfessionalStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessionalRepository for ProfessionalStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Professional>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_crm(&self, crm: &str) -> AppResult<Option<Professional>> {
        query::find_by_crm(&self.db, crm).await
    }

    async fn create(&self, new_professional: NewProfessional) -> AppResult<Professional> {
        query::insert(&self.db, new_professional).await
    }

    async fn list(&self) -> AppResult<Vec<Professional>> {
        query::list(&self.db).await
    }
}

pub(crate) mod query {
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
        QueryOrder, Set,
    };

    use super::super::base::map_write_error;
    use super::super::entities::professional::{self, ActiveModel, Entity as ProfessionalEntity};
    use crate::config::MSG_DUPLICATE_CRM;
    use crate::domain::{NewProfessional, Professional};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<Professional>> {
        let result = ProfessionalEntity::find_by_id(id).one(db).await?;
        Ok(result.map(Professional::from))
    }

    pub(crate) async fn find_by_crm<C: ConnectionTrait>(
        db: &C,
        crm: &str,
    ) -> AppResult<Option<Professional>> {
        let result = ProfessionalEntity::find()
            .filter(professional::Column::Crm.eq(crm))
            .one(db)
            .await?;
        Ok(result.map(Professional::from))
    }

    pub(crate) async fn insert<C: ConnectionTrait>(
        db: &C,
        new_professional: NewProfessional,
    ) -> AppResult<Professional> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(new_professional.name),
            crm: Set(new_professional.crm),
            specialty: Set(new_professional.specialty),
            phone: Set(new_professional.phone),
            email: Set(new_professional.email),
        };

        let model = active_model
            .insert(db)
            .await
            .map_err(|e| map_write_error(e, AppError::DuplicateRecord(MSG_DUPLICATE_CRM)))?;
        Ok(Professional::from(model))
    }

    pub(crate) async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Professional>> {
        let models = ProfessionalEntity::find()
            .order_by_asc(professional::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Professional::from).collect())
    }
}
