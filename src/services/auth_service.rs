//! Authentication service - registration, login and bearer-token resolution.
//!
//! Password hashing lives in the domain `Password` value object and token
//! handling in [`TokenService`]; this service ties them to the user store.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::TokenService;
use crate::config::TOKEN_TYPE_BEARER;
use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Verified when the username is unknown so both paths cost one Argon2 run.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[serde(rename = "tipo")]
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[serde(rename = "expira_em")]
    #[schema(example = 7200)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, password: String, is_admin: bool)
        -> AppResult<User>;

    /// Check credentials and issue a token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Resolve a bearer token to the user it was issued for
    async fn authenticate(&self, token: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    tokens: TokenService,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, tokens: TokenService) -> Self {
        Self { uow, tokens }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        username: String,
        password: String,
        is_admin: bool,
    ) -> AppResult<User> {
        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Err(AppError::DuplicateUser);
        }

        let password_hash = Password::new(&password)?.into_string();

        // A concurrent registration that wins the race hits the unique index
        let user = self
            .uow
            .users()
            .create(NewUser {
                username,
                password_hash,
                is_admin,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user = self.uow.users().find_by_username(&username).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let password_valid = Password::from_hash(stored_hash).verify(&password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::debug!("Login rejected for {}", username);
                return Err(AppError::InvalidCredentials);
            }
        };

        Ok(TokenResponse {
            token: self.tokens.issue(user.id)?,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.tokens.ttl_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> AppResult<User> {
        let user_id = self.tokens.validate(token)?;

        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::{Duration, Utc};
    use mockall::predicate::eq;

    fn tokens() -> TokenService {
        TokenService::new(b"0123456789abcdef0123456789abcdef", Duration::hours(2))
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            username: "drsilva".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            is_admin: false,
        }
    }

    fn service(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        Authenticator::new(Arc::new(TestUnitOfWork::with_users(users)), tokens())
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|name| name == "drsilva")
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|new_user| {
                new_user.username == "drsilva"
                    && new_user.password_hash.starts_with("$argon2")
                    && new_user.is_admin
            })
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    username: new_user.username,
                    password_hash: new_user.password_hash,
                    is_admin: new_user.is_admin,
                })
            });

        let user = service(users)
            .register("drsilva".to_string(), "s3nha".to_string(), true)
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_admin);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("s3nha"))));
        users.expect_create().never();

        let result = service(users)
            .register("drsilva".to_string(), "outra".to_string(), false)
            .await;
        assert!(matches!(result, Err(AppError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("s3nha"))));

        let response = service(users)
            .login("drsilva".to_string(), "s3nha".to_string())
            .await
            .unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 7200);
        assert_eq!(tokens().validate(&response.token).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("s3nha"))));

        let result = service(users)
            .login("drsilva".to_string(), "errada".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let result = service(users)
            .login("ninguem".to_string(), "s3nha".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_resolves_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(stored_user("s3nha"))));

        let token = tokens().issue(1).unwrap();
        let user = service(users).authenticate(&token).await.unwrap();
        assert_eq!(user.username, "drsilva");
    }

    #[tokio::test]
    async fn test_authenticate_deleted_user_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let token = tokens().issue(99).unwrap();
        let result = service(users).authenticate(&token).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_authenticate_expired_token_skips_lookup() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();

        let token = tokens()
            .issue_at(1, Utc::now() - Duration::hours(3))
            .unwrap();
        let result = service(users).authenticate(&token).await;
        assert!(matches!(result, Err(AppError::ExpiredToken)));
    }
}
