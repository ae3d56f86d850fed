//! Patient database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Patient;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub birth_date: Date,
    pub sex: String,
    pub phone: Option<String>,
    pub address: Option<String>,
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

impl From<Model> for Patient {
    fn from(model: Model) -> Self {
        Patient {
            id: model.id,
            name: model.name,
            cpf: model.cpf,
            birth_date: model.birth_date,
            sex: model.sex,
            phone: model.phone,
            address: model.address,
        }
    }
}
