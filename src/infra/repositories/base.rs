//! Shared write-path helpers for all repositories.
//!
//! Constraint violations raised by the store at commit time are mapped onto
//! the application taxonomy here, so concurrent writers that slip past a
//! service-level pre-check still get a meaningful error.

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

/// Map a failed insert into an application error.
///
/// Unique-index violations become `on_duplicate`; foreign-key violations
/// become a validation error; anything else stays a database error.
pub(crate) fn map_write_error(err: DbErr, on_duplicate: AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            on_duplicate
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key constraint violated: {}", detail);
            AppError::validation("registro referenciado não existe")
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::DatabaseConnection;

    use super::super::{
        consultation_query, medical_record_query, PatientRepository, PatientStore,
        ProfessionalRepository, ProfessionalStore, UserRepository, UserStore,
    };
    use crate::config::{Config, MSG_DUPLICATE_CPF, MSG_DUPLICATE_RECORD};
    use crate::domain::{
        NewConsultation, NewMedicalRecord, NewPatient, NewProfessional, NewUser,
    };
    use crate::infra::Database;

    async fn connection() -> DatabaseConnection {
        let config = Config::new("sqlite::memory:", "0123456789abcdef0123456789abcdef").unwrap();
        Database::connect(&config).await.unwrap().get_connection()
    }

    fn new_patient(cpf: &str) -> NewPatient {
        NewPatient {
            name: "Maria Souza".to_string(),
            cpf: cpf.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
            sex: "F".to_string(),
            phone: None,
            address: None,
        }
    }

    fn new_consultation(patient_id: i32, professional_id: i32) -> NewConsultation {
        NewConsultation {
            patient_id,
            professional_id,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: "14:30".to_string(),
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_at_store_is_duplicate_user() {
        let users = UserStore::new(connection().await);
        let new_user = || NewUser {
            username: "drsilva".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_admin: false,
        };

        users.create(new_user()).await.unwrap();
        let second = users.create(new_user()).await;
        assert!(matches!(second, Err(AppError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_duplicate_cpf_at_store_is_duplicate_record() {
        let patients = PatientStore::new(connection().await);

        patients.create(new_patient("123")).await.unwrap();
        let second = patients.create(new_patient("123")).await;
        assert!(matches!(
            second,
            Err(AppError::DuplicateRecord(MSG_DUPLICATE_CPF))
        ));
    }

    #[tokio::test]
    async fn test_second_record_at_store_is_duplicate_record() {
        let db = connection().await;
        let patient = PatientStore::new(db.clone())
            .create(new_patient("456"))
            .await
            .unwrap();
        let professional = ProfessionalStore::new(db.clone())
            .create(NewProfessional {
                name: "Dr. João Lima".to_string(),
                crm: "CRM-1".to_string(),
                specialty: None,
                phone: None,
                email: None,
            })
            .await
            .unwrap();
        let consultation =
            consultation_query::insert(&db, new_consultation(patient.id, professional.id))
                .await
                .unwrap();

        let record = || NewMedicalRecord {
            consultation_id: consultation.id,
            notes: "Retorno em 30 dias".to_string(),
        };
        medical_record_query::insert(&db, record()).await.unwrap();
        let second = medical_record_query::insert(&db, record()).await;
        assert!(matches!(
            second,
            Err(AppError::DuplicateRecord(MSG_DUPLICATE_RECORD))
        ));
    }

    #[tokio::test]
    async fn test_orphan_consultation_is_validation_error() {
        let db = connection().await;

        let result = consultation_query::insert(&db, new_consultation(41, 42)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unrelated_errors_stay_database_errors() {
        let err = DbErr::Custom("connection reset".to_string());
        let mapped = map_write_error(err, AppError::DuplicateUser);
        assert!(matches!(mapped, AppError::Database(_)));
    }
}
