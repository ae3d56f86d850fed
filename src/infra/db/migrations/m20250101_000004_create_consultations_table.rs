//! Migration: Create consultations table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consultations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Consultations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Consultations::PatientId).integer().not_null())
                    .col(
                        ColumnDef::new(Consultations::ProfessionalId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Consultations::Date).date().not_null())
                    .col(ColumnDef::new(Consultations::Time).string().not_null())
                    .col(ColumnDef::new(Consultations::Reason).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consultations_patient")
                            .from(Consultations::Table, Consultations::PatientId)
                            .to(Patients::Table, Patients::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consultations_professional")
                            .from(Consultations::Table, Consultations::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Records-by-patient walks consultations by patient
        manager
            .create_index(
                Index::create()
                    .name("idx_consultations_patient_id")
                    .table(Consultations::Table)
                    .col(Consultations::PatientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_consultations_patient_id")
                    .table(Consultations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Consultations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Consultations {
    Table,
    Id,
    PatientId,
    ProfessionalId,
    Date,
    Time,
    Reason,
}

#[derive(Iden)]
enum Patients {
    Table,
    Id,
}

#[derive(Iden)]
enum Professionals {
    Table,
    Id,
}
