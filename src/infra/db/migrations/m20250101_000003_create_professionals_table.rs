//! Migration: Create professionals table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professionals::Name).string().not_null())
                    .col(
                        ColumnDef::new(Professionals::Crm)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professionals::Specialty).string().null())
                    .col(ColumnDef::new(Professionals::Phone).string().null())
                    .col(ColumnDef::new(Professionals::Email).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Professionals {
    Table,
    Id,
    Name,
    Crm,
    Specialty,
    Phone,
    Email,
}
