//! Health professional database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Professional;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professionals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub crm: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::consultation::Entity")]
    Consultation,
}

impl Related<super::consultation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consultation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Professional {
    fn from(model: Model) -> Self {
        Professional {
            id: model.id,
            name: model.name,
            crm: model.crm,
            specialty: model.specialty,
            phone: model.phone,
            email: model.email,
        }
    }
}
