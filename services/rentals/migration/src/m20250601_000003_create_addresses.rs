use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Addresses::PersonId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Addresses::OldAddress).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Addresses::State)
                            .string_len(50)
                            .not_null()
                            .default("Maharashtra"),
                    )
                    .col(ColumnDef::new(Addresses::City).string_len(70).not_null())
                    .col(ColumnDef::new(Addresses::PinCode).string_len(6).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Addresses::Table, Addresses::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    PersonId,
    OldAddress,
    State,
    City,
    PinCode,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
}
