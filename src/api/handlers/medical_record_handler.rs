//! Medical record handlers.

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
use crate::config::MSG_RECORD_CREATED;
use crate::domain::{MedicalRecord, NewMedicalRecord, PatientRecordEntry};
use crate::errors::AppResult;
use crate::types::Created;

/// Medical record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMedicalRecordRequest {
    #[serde(rename = "id_consulta")]
    #[validate(required(message = "id_consulta é obrigatório"))]
    #[schema(example = 1)]
    pub consultation_id: Option<i32>,
    #[serde(rename = "anotacoes")]
    #[validate(
        required(message = "anotacoes é obrigatório"),
        custom(function = "crate::domain::input::not_blank", message = "anotacoes é obrigatório")
    )]
    #[schema(example = "Paciente relata dor de cabeça recorrente.")]
    pub notes: Option<String>,
}

impl From<CreateMedicalRecordRequest> for NewMedicalRecord {
    fn from(request: CreateMedicalRecordRequest) -> Self {
        Self {
            consultation_id: request.consultation_id.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
        }
    }
}

pub fn medical_record_routes() -> Router<AppState> {
    Router::new()
        .route("/medical-record", post(create_medical_record))
        .route("/prontuario", post(create_medical_record))
        .route("/medical-records/patient/:id", get(list_patient_records))
        .route("/prontuarios/paciente/:id", get(list_patient_records))
}

/// Attach notes to a consultation
#[utoipa::path(
    post,
    path = "/medical-record",
    tag = "Medical records",
    request_body = CreateMedicalRecordRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Record registered; body is {mensagem, dados}", body = MedicalRecord),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Consultation not found"),
        (status = 409, description = "Consultation already has a record")
    )
)]
pub async fn create_medical_record(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMedicalRecordRequest>,
) -> AppResult<Created<MedicalRecord>> {
    let record = state
        .medical_record_service
        .create(NewMedicalRecord::from(payload))
        .await?;

    Ok(Created(MSG_RECORD_CREATED, record))
}

/// Consultations of a patient that have notes, with the notes
#[utoipa::path(
    get,
    path = "/medical-records/patient/{id}",
    tag = "Medical records",
    params(("id" = i32, Path, description = "Patient id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Records ordered by consultation", body = Vec<PatientRecordEntry>),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn list_patient_records(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Vec<PatientRecordEntry>>> {
    Ok(Json(state.medical_record_service.list_for_patient(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_notes_rejected() {
        let request = CreateMedicalRecordRequest {
            consultation_id: Some(1),
            notes: Some(" \n\t ".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }
}
