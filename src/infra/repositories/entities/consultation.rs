//! Consultation database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Consultation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consultations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_id: i32,
    pub professional_id: i32,
    pub date: Date,
    pub time: String,
    pub reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::Id"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::professional::Entity",
        from = "Column::ProfessionalId",
        to = "super::professional::Column::Id"
    )]
    Professional,
    #[sea_orm(has_one = "super::medical_record::Entity")]
    MedicalRecord,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<super::professional::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professional.def()
    }
}

impl Related<super::medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Consultation {
    fn from(model: Model) -> Self {
        Consultation {
            id: model.id,
            patient_id: model.patient_id,
            professional_id: model.professional_id,
            date: model.date,
            time: model.time,
            reason: model.reason,
        }
    }
}
