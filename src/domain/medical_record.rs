//! Medical record domain entity and the per-patient record view.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::Consultation;

/// Clinical notes attached to exactly one consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MedicalRecord {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "id_consulta")]
    #[schema(example = 1)]
    pub consultation_id: i32,
    #[serde(rename = "anotacoes")]
    #[schema(example = "Paciente relata dor de cabeça recorrente.")]
    pub notes: String,
}

/// Validated record data ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedicalRecord {
    pub consultation_id: i32,
    pub notes: String,
}

/// Consultation fields combined with its notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PatientRecordEntry {
    #[serde(rename = "id_consulta")]
    #[schema(example = 1)]
    pub consultation_id: i32,
    #[serde(rename = "data")]
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    #[schema(example = "14:30")]
    pub time: String,
    #[serde(rename = "motivo")]
    pub reason: Option<String>,
    #[serde(rename = "anotacoes")]
    pub notes: String,
}

impl PatientRecordEntry {
    pub fn new(consultation: Consultation, record: MedicalRecord) -> Self {
        Self {
            consultation_id: consultation.id,
            date: consultation.date,
            time: consultation.time,
            reason: consultation.reason,
            notes: record.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_iso_date() {
        let consultation = Consultation {
            id: 3,
            patient_id: 1,
            professional_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: "14:30".to_string(),
            reason: Some("Retorno".to_string()),
        };
        let record = MedicalRecord {
            id: 9,
            consultation_id: 3,
            notes: "Sem alterações".to_string(),
        };

        let json = serde_json::to_value(PatientRecordEntry::new(consultation, record)).unwrap();
        assert_eq!(json["id_consulta"], 3);
        assert_eq!(json["data"], "2024-03-01");
        assert_eq!(json["hora"], "14:30");
        assert_eq!(json["motivo"], "Retorno");
        assert_eq!(json["anotacoes"], "Sem alterações");
    }
}
