//! Infrastructure layer - External systems integration
//!
//! Database connection and migrations, repositories over the SeaORM
//! entities, and the unit of work that groups them under one transaction.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ConsultationRepository, ConsultationStore, MedicalRecordRepository, MedicalRecordStore,
    PatientRepository, PatientStore, ProfessionalRepository, ProfessionalStore, UserRepository,
    UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxConsultationRepository, TxMedicalRecordRepository,
    TxPatientRepository, TxProfessionalRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockConsultationRepository, MockMedicalRecordRepository, MockPatientRepository,
    MockProfessionalRepository, MockUserRepository,
};
