//! Patient handlers.

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
use crate::config::MSG_PATIENT_CREATED;
use crate::domain::{input, NewPatient, Patient};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// Patient registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePatientRequest {
    #[serde(rename = "nome")]
    #[validate(
        required(message = "nome é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "nome é obrigatório")
    )]
    #[schema(example = "Maria Souza")]
    pub name: Option<String>,
    #[validate(
        required(message = "cpf é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "cpf é obrigatório")
    )]
    #[schema(example = "123.456.789-00")]
    pub cpf: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(rename = "data_nascimento")]
    #[validate(
        required(message = "data_nascimento é obrigatória"),
        custom(function = "crate::domain::input::iso_date", message = "data_nascimento deve estar no formato AAAA-MM-DD")
    )]
    #[schema(example = "1990-05-12")]
    pub birth_date: Option<String>,
    #[serde(rename = "sexo")]
    #[validate(
        required(message = "sexo é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "sexo é obrigatório")
    )]
    #[schema(example = "F")]
    pub sex: Option<String>,
    #[serde(rename = "telefone")]
    #[schema(example = "(11) 98765-4321")]
    pub phone: Option<String>,
    #[serde(rename = "endereco")]
    #[schema(example = "Rua das Flores, 10")]
    pub address: Option<String>,
}

impl TryFrom<CreatePatientRequest> for NewPatient {
    type Error = AppError;

    fn try_from(request: CreatePatientRequest) -> AppResult<Self> {
        let birth_date = input::parse_date(
            "data_nascimento",
            request.birth_date.as_deref().unwrap_or_default(),
        )
        .map_err(AppError::validation)?;

        Ok(NewPatient {
            name: request.name.unwrap_or_default(),
            cpf: request.cpf.unwrap_or_default(),
            birth_date,
            sex: request.sex.unwrap_or_default(),
            phone: request.phone,
            address: request.address,
        })
    }
}

pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patient", post(create_patient))
        .route("/paciente", post(create_patient))
        .route("/patient/:id", get(get_patient))
        .route("/patients", get(list_patients))
        .route("/pacientes", get(list_patients))
}

/// Register a patient
#[utoipa::path(
    post,
    path = "/patient",
    tag = "Patients",
    request_body = CreatePatientRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Patient registered; body is {mensagem, dados}", body = Patient),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn create_patient(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePatientRequest>,
) -> AppResult<Created<Patient>> {
    let patient = state
        .patient_service
        .create(NewPatient::try_from(payload)?)
        .await?;

    Ok(Created(MSG_PATIENT_CREATED, patient))
}

/// Get a patient by id
#[utoipa::path(
    get,
    path = "/patient/{id}",
    tag = "Patients",
    params(("id" = i32, Path, description = "Patient id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Patient", body = Patient),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn get_patient(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Patient>> {
    let patient = state.patient_service.get(id).await?;
    Ok(Json(patient))
}

/// List all patients
#[utoipa::path(
    get,
    path = "/patients",
    tag = "Patients",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All patients in registration order", body = Vec<Patient>)
    )
)]
pub async fn list_patients(State(state): State<AppState>) -> AppResult<Json<Vec<Patient>>> {
    let patients = state.patient_service.list().await?;
    Ok(Json(patients))
}
