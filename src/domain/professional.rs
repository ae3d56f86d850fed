//! Health professional domain entity.

use serde::Serialize;
use utoipa::ToSchema;

/// Registered health professional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Professional {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Dr. João Silva")]
    pub name: String,
    /// License number (CRM), unique
    #[schema(example = "CRM-SP 123456")]
    pub crm: String,
    #[serde(rename = "especialidade")]
    #[schema(example = "Cardiologia")]
    pub specialty: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Validated professional data ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessional {
    pub name: String,
    pub crm: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
