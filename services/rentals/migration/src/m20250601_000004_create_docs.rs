use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Docs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Docs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Docs::PersonId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Docs::AadhaarNo)
                            .string_len(15)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Docs::AadhaarDoc).string_len(255))
                    .col(
                        ColumnDef::new(Docs::PanNo)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Docs::PanDoc).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Docs::Table, Docs::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Docs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Docs {
    Table,
    Id,
    PersonId,
    AadhaarNo,
    AadhaarDoc,
    PanNo,
    PanDoc,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
}
