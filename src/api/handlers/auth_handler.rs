//! Authentication handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::MSG_USER_REGISTERED;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Login name
    #[serde(rename = "usuario")]
    #[validate(
        required(message = "usuario é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "usuario é obrigatório")
    )]
    #[schema(example = "drsilva")]
    pub username: Option<String>,
    #[serde(rename = "senha")]
    #[validate(
        required(message = "senha é obrigatória"),
        length(min = 1, message = "senha é obrigatória")
    )]
    #[schema(example = "s3nha-forte")]
    pub password: Option<String>,
    /// Administrator flag, false when omitted
    #[serde(default)]
    #[schema(example = false)]
    pub is_admin: bool,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "usuario")]
    #[validate(
        required(message = "usuario é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "usuario é obrigatório")
    )]
    #[schema(example = "drsilva")]
    pub username: Option<String>,
    #[serde(rename = "senha")]
    #[validate(
        required(message = "senha é obrigatória"),
        length(min = 1, message = "senha é obrigatória")
    )]
    #[schema(example = "s3nha-forte")]
    pub password: Option<String>,
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/registrar", post(register))
        .route("/login", post(login))
}

/// Routes that need an authenticated caller
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered; body is {mensagem, dados}", body = UserResponse),
        (status = 400, description = "Validation error or username taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .auth_service
        .register(
            payload.username.unwrap_or_default(),
            payload.password.unwrap_or_default(),
            payload.is_admin,
        )
        .await?;

    Ok(Created(MSG_USER_REGISTERED, UserResponse::from(user)))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(
            payload.username.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Json(token))
}

/// Current authenticated user
#[utoipa::path(
    get,
    path = "/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 403, description = "Token user no longer exists")
    )
)]
pub async fn me(Extension(current_user): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(UserResponse::from(current_user))
}
