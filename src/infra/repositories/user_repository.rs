//! User repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{NewUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by login name
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        query::find_by_username(&self.db, username).await
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        query::insert(&self.db, new_user).await
    }
}

/// Queries usable on a pooled connection or inside a transaction.
pub(crate) mod query {
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    };

    use super::super::base::map_write_error;
    use super::super::entities::user::{self, ActiveModel, Entity as UserEntity};
    use crate::domain::{NewUser, User};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(db).await?;
        Ok(result.map(User::from))
    }

    pub(crate) async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?;
        Ok(result.map(User::from))
    }

    pub(crate) async fn insert<C: ConnectionTrait>(db: &C, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            is_admin: Set(new_user.is_admin),
        };

        let model = active_model
            .insert(db)
            .await
            .map_err(|e| map_write_error(e, AppError::DuplicateUser))?;
        Ok(User::from(model))
    }
}
