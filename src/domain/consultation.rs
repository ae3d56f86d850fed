//! Consultation domain entity.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Appointment linking one patient and one professional.
///
/// Overlapping consultations are allowed; only the referenced ids are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Consultation {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "id_paciente")]
    #[schema(example = 1)]
    pub patient_id: i32,
    #[serde(rename = "id_profissional")]
    #[schema(example = 1)]
    pub professional_id: i32,
    #[serde(rename = "data")]
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub date: NaiveDate,
    /// Time of day as submitted
    #[serde(rename = "hora")]
    #[schema(example = "14:30")]
    pub time: String,
    #[serde(rename = "motivo")]
    #[schema(example = "Consulta de rotina")]
    pub reason: Option<String>,
}

/// Validated consultation data ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsultation {
    pub patient_id: i32,
    pub professional_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub reason: Option<String>,
}
