//! Migration: Create medical records table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicalRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // One record per consultation
                    .col(
                        ColumnDef::new(MedicalRecords::ConsultationId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MedicalRecords::Notes).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_records_consultation")
                            .from(MedicalRecords::Table, MedicalRecords::ConsultationId)
                            .to(Consultations::Table, Consultations::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MedicalRecords {
    Table,
    Id,
    ConsultationId,
    Notes,
}

#[derive(Iden)]
enum Consultations {
    Table,
    Id,
}
