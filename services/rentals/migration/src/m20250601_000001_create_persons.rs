use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Persons::Username)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Persons::FirstName).string_len(75).not_null())
                    .col(ColumnDef::new(Persons::MiddleName).string_len(75))
                    .col(ColumnDef::new(Persons::LastName).string_len(75).not_null())
                    .col(ColumnDef::new(Persons::Email).string_len(255).unique_key())
                    .col(
                        ColumnDef::new(Persons::Role)
                            .string_len(50)
                            .not_null()
                            .default("Tenant"),
                    )
                    .col(
                        ColumnDef::new(Persons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
    Username,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Role,
    CreatedAt,
}
