//! Medical record database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::MedicalRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One record per consultation
    #[sea_orm(unique)]
    pub consultation_id: i32,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::consultation::Entity",
        from = "Column::ConsultationId",
        to = "super::consultation::Column::Id"
    )]
    Consultation,
}

impl Related<super::consultation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MedicalRecord {
    fn from(model: Model) -> Self {
        MedicalRecord {
            id: model.id,
            consultation_id: model.consultation_id,
            notes: model.notes,
        }
    }
}
