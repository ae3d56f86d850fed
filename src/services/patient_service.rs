//! Patient service - registration and lookup of patients.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_DUPLICATE_CPF, MSG_PATIENT_NOT_FOUND};
use crate::domain::{NewPatient, Patient};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait PatientService: Send + Sync {
    /// Register a patient; the CPF must be unused
    async fn create(&self, new_patient: NewPatient) -> AppResult<Patient>;

    async fn get(&self, id: i32) -> AppResult<Patient>;

    /// All patients in insertion order
    async fn list(&self) -> AppResult<Vec<Patient>>;
}

pub struct PatientManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PatientManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PatientService for PatientManager<U> {
    async fn create(&self, new_patient: NewPatient) -> AppResult<Patient> {
        let patients = self.uow.patients();

        if patients.find_by_cpf(&new_patient.cpf).await?.is_some() {
            return Err(AppError::DuplicateRecord(MSG_DUPLICATE_CPF));
        }

        let patient = patients.create(new_patient).await?;
        tracing::info!(patient_id = patient.id, "Patient registered");
        Ok(patient)
    }

    async fn get(&self, id: i32) -> AppResult<Patient> {
        self.uow
            .patients()
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_PATIENT_NOT_FOUND)
    }

    async fn list(&self) -> AppResult<Vec<Patient>> {
        self.uow.patients().list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockPatientRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn new_patient() -> NewPatient {
        NewPatient {
            name: "Maria Souza".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 12).unwrap(),
            sex: "F".to_string(),
            phone: None,
            address: Some("Rua das Flores, 10".to_string()),
        }
    }

    fn stored(id: i32, new_patient: NewPatient) -> Patient {
        Patient {
            id,
            name: new_patient.name,
            cpf: new_patient.cpf,
            birth_date: new_patient.birth_date,
            sex: new_patient.sex,
            phone: new_patient.phone,
            address: new_patient.address,
        }
    }

    fn service(patients: MockPatientRepository) -> PatientManager<TestUnitOfWork> {
        PatientManager::new(Arc::new(TestUnitOfWork::with_patients(patients)))
    }

    #[tokio::test]
    async fn test_create_patient() {
        let mut patients = MockPatientRepository::new();
        patients.expect_find_by_cpf().returning(|_| Ok(None));
        patients
            .expect_create()
            .times(1)
            .returning(|p| Ok(stored(1, p)));

        let patient = service(patients).create(new_patient()).await.unwrap();
        assert_eq!(patient.id, 1);
        assert_eq!(patient.birth_date.to_string(), "1990-05-12");
    }

    #[tokio::test]
    async fn test_create_duplicate_cpf() {
        let mut patients = MockPatientRepository::new();
        patients
            .expect_find_by_cpf()
            .withf(|cpf| cpf == "123.456.789-00")
            .returning(|_| Ok(Some(stored(4, new_patient()))));
        patients.expect_create().never();

        let result = service(patients).create(new_patient()).await;
        assert!(matches!(
            result,
            Err(AppError::DuplicateRecord(MSG_DUPLICATE_CPF))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_patient() {
        let mut patients = MockPatientRepository::new();
        patients
            .expect_find_by_id()
            .with(eq(8))
            .returning(|_| Ok(None));

        let result = service(patients).get(8).await;
        assert!(matches!(result, Err(AppError::NotFound(MSG_PATIENT_NOT_FOUND))));
    }
}
