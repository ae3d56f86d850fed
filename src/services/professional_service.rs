//! Health professional service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_DUPLICATE_CRM, MSG_PROFESSIONAL_NOT_FOUND};
use crate::domain::{NewProfessional, Professional};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ProfessionalService: Send + Sync {
    /// Register a professional; the CRM must be unused
    async fn create(&self, new_professional: NewProfessional) -> AppResult<Professional>;

    async fn get(&self, id: i32) -> AppResult<Professional>;

    async fn list(&self) -> AppResult<Vec<Professional>>;
}

pub struct ProfessionalManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfessionalManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfessionalService for ProfessionalManager<U> {
    async fn create(&self, new_professional: NewProfessional) -> AppResult<Professional> {
        let professionals = self.uow.professionals();

        if professionals
            .find_by_crm(&new_professional.crm)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateRecord(MSG_DUPLICATE_CRM));
        }

        let professional = professionals.create(new_professional).await?;
        tracing::info!(professional_id = professional.id, "Professional registered");
        Ok(professional)
    }

    async fn get(&self, id: i32) -> AppResult<Professional> {
        self.uow
            .professionals()
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_PROFESSIONAL_NOT_FOUND)
    }

    async fn list(&self) -> AppResult<Vec<Professional>> {
        self.uow.professionals().list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockProfessionalRepository;
    use crate::services::test_support::TestUnitOfWork;

    fn professional(id: i32, crm: &str) -> Professional {
        Professional {
            id,
            name: "Dr. João Lima".to_string(),
            crm: crm.to_string(),
            specialty: Some("Cardiologia".to_string()),
            phone: None,
            email: Some("joao@clinica.example".to_string()),
        }
    }

    fn service(professionals: MockProfessionalRepository) -> ProfessionalManager<TestUnitOfWork> {
        ProfessionalManager::new(Arc::new(TestUnitOfWork::with_professionals(professionals)))
    }

    #[tokio::test]
    async fn test_create_duplicate_crm() {
        let mut professionals = MockProfessionalRepository::new();
        professionals
            .expect_find_by_crm()
            .returning(|crm| Ok(Some(professional(2, crm))));
        professionals.expect_create().never();

        let result = service(professionals)
            .create(NewProfessional {
                name: "Dra. Ana Reis".to_string(),
                crm: "CRM-SP 1234".to_string(),
                specialty: None,
                phone: None,
                email: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::DuplicateRecord(MSG_DUPLICATE_CRM))
        ));
    }

    #[tokio::test]
    async fn test_list_keeps_store_order() {
        let mut professionals = MockProfessionalRepository::new();
        professionals
            .expect_list()
            .returning(|| Ok(vec![professional(1, "A-1"), professional(2, "B-2")]));

        let listed = service(professionals).list().await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
