//! Migration: Create patients table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Patients::Name).string().not_null())
                    .col(
                        ColumnDef::new(Patients::Cpf)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Patients::BirthDate).date().not_null())
                    .col(ColumnDef::new(Patients::Sex).string().not_null())
                    .col(ColumnDef::new(Patients::Phone).string().null())
                    .col(ColumnDef::new(Patients::Address).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Patients {
    Table,
    Id,
    Name,
    Cpf,
    BirthDate,
    Sex,
    Phone,
    Address,
}
