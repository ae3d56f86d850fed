//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, consultation_handler, medical_record_handler, patient_handler,
    professional_handler,
};
use crate::domain::{
    Consultation, MedicalRecord, Patient, PatientRecordEntry, Professional, UserResponse,
};
use crate::services::TokenResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic Records API",
        version = "0.1.0",
        description = "Patients, health professionals, consultations and medical records behind bearer-token auth",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        patient_handler::create_patient,
        patient_handler::get_patient,
        patient_handler::list_patients,
        professional_handler::create_professional,
        professional_handler::get_professional,
        professional_handler::list_professionals,
        consultation_handler::create_consultation,
        consultation_handler::get_consultation,
        medical_record_handler::create_medical_record,
        medical_record_handler::list_patient_records,
    ),
    components(
        schemas(
            UserResponse,
            Patient,
            Professional,
            Consultation,
            MedicalRecord,
            PatientRecordEntry,
            TokenResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            patient_handler::CreatePatientRequest,
            professional_handler::CreateProfessionalRequest,
            consultation_handler::CreateConsultationRequest,
            medical_record_handler::CreateMedicalRecordRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and current user"),
        (name = "Patients", description = "Patient registry"),
        (name = "Professionals", description = "Health professional registry"),
        (name = "Consultations", description = "Appointments between patients and professionals"),
        (name = "Medical records", description = "Clinical notes per consultation")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes_and_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/patient"));
        assert!(doc.paths.paths.contains_key("/medical-records/patient/{id}"));

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
