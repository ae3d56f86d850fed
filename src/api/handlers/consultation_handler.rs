//! Consultation handlers.

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
use crate::config::MSG_CONSULTATION_CREATED;
use crate::domain::{input, Consultation, NewConsultation};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// Consultation scheduling request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConsultationRequest {
    #[serde(rename = "id_paciente")]
    #[validate(required(message = "id_paciente é obrigatório"))]
    #[schema(example = 1)]
    pub patient_id: Option<i32>,
    #[serde(rename = "id_profissional")]
    #[validate(required(message = "id_profissional é obrigatório"))]
    #[schema(example = 1)]
    pub professional_id: Option<i32>,
    /// `YYYY-MM-DD`
    #[serde(rename = "data")]
    #[validate(
        required(message = "data é obrigatória"),
        custom(function = "crate::domain::input::iso_date", message = "data deve estar no formato AAAA-MM-DD")
    )]
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`
    #[serde(rename = "hora")]
    #[validate(
        required(message = "hora é obrigatória"),
        custom(function = "crate::domain::input::time_of_day", message = "hora deve estar no formato HH:MM")
    )]
    #[schema(example = "14:30")]
    pub time: Option<String>,
    #[serde(rename = "motivo")]
    #[schema(example = "Consulta de rotina")]
    pub reason: Option<String>,
}

impl TryFrom<CreateConsultationRequest> for NewConsultation {
    type Error = AppError;

    fn try_from(request: CreateConsultationRequest) -> AppResult<Self> {
        let mut problems = Vec::new();

        let date = input::parse_date("data", request.date.as_deref().unwrap_or_default())
            .map_err(|e| problems.push(e))
            .ok();
        let time = input::parse_time("hora", request.time.as_deref().unwrap_or_default())
            .map_err(|e| problems.push(e))
            .ok();

        match (date, time) {
            (Some(date), Some(time)) => Ok(NewConsultation {
                patient_id: request.patient_id.unwrap_or_default(),
                professional_id: request.professional_id.unwrap_or_default(),
                date,
                time,
                reason: request.reason,
            }),
            _ => Err(AppError::Validation(problems)),
        }
    }
}

pub fn consultation_routes() -> Router<AppState> {
    Router::new()
        .route("/consultation", post(create_consultation))
        .route("/consulta", post(create_consultation))
        .route("/consultation/:id", get(get_consultation))
}

/// Schedule a consultation
#[utoipa::path(
    post,
    path = "/consultation",
    tag = "Consultations",
    request_body = CreateConsultationRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Consultation registered; body is {mensagem, dados}", body = Consultation),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Patient or professional not found")
    )
)]
pub async fn create_consultation(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateConsultationRequest>,
) -> AppResult<Created<Consultation>> {
    let consultation = state
        .consultation_service
        .create(NewConsultation::try_from(payload)?)
        .await?;

    Ok(Created(MSG_CONSULTATION_CREATED, consultation))
}

/// Get a consultation by id
#[utoipa::path(
    get,
    path = "/consultation/{id}",
    tag = "Consultations",
    params(("id" = i32, Path, description = "Consultation id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Consultation", body = Consultation),
        (status = 404, description = "Consultation not found")
    )
)]
pub async fn get_consultation(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Consultation>> {
    Ok(Json(state.consultation_service.get(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, time: &str) -> CreateConsultationRequest {
        CreateConsultationRequest {
            patient_id: Some(1),
            professional_id: Some(2),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            reason: None,
        }
    }

    #[test]
    fn test_request_converts() {
        let new_consultation = NewConsultation::try_from(request("2024-03-01", "14:30")).unwrap();
        assert_eq!(new_consultation.patient_id, 1);
        assert_eq!(new_consultation.professional_id, 2);
        assert_eq!(new_consultation.time, "14:30");
    }

    #[test]
    fn test_request_reports_each_bad_field() {
        let err = NewConsultation::try_from(request("01/03/2024", "meio-dia")).unwrap_err();
        match err {
            AppError::Validation(details) => assert_eq!(
                details,
                vec![
                    "data deve estar no formato AAAA-MM-DD".to_string(),
                    "hora deve estar no formato HH:MM".to_string(),
                ]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
