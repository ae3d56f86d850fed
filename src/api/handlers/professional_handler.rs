//! Health professional handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::MSG_PROFESSIONAL_CREATED;
use crate::domain::{NewProfessional, Professional};
use crate::errors::AppResult;
use crate::types::Created;

/// Professional registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfessionalRequest {
    #[serde(rename = "nome")]
    #[validate(
        required(message = "nome é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "nome é obrigatório")
    )]
    #[schema(example = "Dr. João Lima")]
    pub name: Option<String>,
    /// Medical license number
    #[validate(
        required(message = "crm é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "crm é obrigatório")
    )]
    #[schema(example = "CRM-SP 123456")]
    pub crm: Option<String>,
    #[serde(rename = "especialidade")]
    #[schema(example = "Cardiologia")]
    pub specialty: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[validate(email(message = "email inválido"))]
    #[schema(example = "joao@clinica.example")]
    pub email: Option<String>,
}

impl From<CreateProfessionalRequest> for NewProfessional {
    fn from(request: CreateProfessionalRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            crm: request.crm.unwrap_or_default(),
            specialty: request.specialty,
            phone: request.phone,
            email: request.email,
        }
    }
}

pub fn professional_routes() -> Router<AppState> {
    Router::new()
        .route("/professional", post(create_professional))
        .route("/profissional", post(create_professional))
        .route("/professional/:id", get(get_professional))
        .route("/professionals", get(list_professionals))
        .route("/profissionais", get(list_professionals))
}

/// Register a health professional
#[utoipa::path(
    post,
    path = "/professional",
    tag = "Professionals",
    request_body = CreateProfessionalRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Professional registered; body is {mensagem, dados}", body = Professional),
        (status = 400, description = "Validation error"),
        (status = 409, description = "CRM already registered")
    )
)]
pub async fn create_professional(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProfessionalRequest>,
) -> AppResult<Created<Professional>> {
    let professional = state
        .professional_service
        .create(NewProfessional::from(payload))
        .await?;

    Ok(Created(MSG_PROFESSIONAL_CREATED, professional))
}

/// Get a professional by id
#[utoipa::path(
    get,
    path = "/professional/{id}",
    tag = "Professionals",
    params(("id" = i32, Path, description = "Professional id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Professional", body = Professional),
        (status = 404, description = "Professional not found")
    )
)]
pub async fn get_professional(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Professional>> {
    Ok(Json(state.professional_service.get(id).await?))
}

/// List all professionals
#[utoipa::path(
    get,
    path = "/professionals",
    tag = "Professionals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All professionals in registration order", body = Vec<Professional>)
    )
)]
pub async fn list_professionals(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Professional>>> {
    Ok(Json(state.professional_service.list().await?))
}
