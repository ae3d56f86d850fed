//! Patient domain entity.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Patient {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Maria Souza")]
    pub name: String,
    /// National id (CPF), unique
    #[schema(example = "123.456.789-00")]
    pub cpf: String,
    #[serde(rename = "data_nascimento")]
    #[schema(value_type = String, format = Date, example = "1990-05-12")]
    pub birth_date: NaiveDate,
    #[serde(rename = "sexo")]
    #[schema(example = "F")]
    pub sex: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
}

/// Validated patient data ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}
