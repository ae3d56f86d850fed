//! Bearer-token access guard.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{User, UserResponse};
use crate::errors::AppError;

/// Authenticated caller, resolved from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

/// Resolve the `Authorization: Bearer` header to a [`CurrentUser`].
///
/// The user must still exist; the resolved user is inserted into the
/// request extensions for handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(
        request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok()),
    )?;

    let user = state.auth_service.authenticate(token).await?;
    tracing::debug!(user_id = user.id, "Request authenticated");

    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}

/// Pull the token out of an Authorization header value
fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.map(str::trim).unwrap_or_default();
    if header.is_empty() {
        return Err(AppError::MissingToken);
    }

    let token = match header.strip_prefix(BEARER_TOKEN_PREFIX) {
        Some(token) => token.trim(),
        None if header == BEARER_TOKEN_PREFIX.trim_end() => "",
        None => return Err(AppError::InvalidToken),
    };

    if token.is_empty() {
        return Err(AppError::MissingToken);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert!(matches!(bearer_token(None), Err(AppError::MissingToken)));
        assert!(matches!(bearer_token(Some("")), Err(AppError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer")), Err(AppError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer   ")), Err(AppError::MissingToken)));
    }

    #[test]
    fn test_other_scheme_is_invalid() {
        assert!(matches!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AppError::InvalidToken)
        ));
    }
}
