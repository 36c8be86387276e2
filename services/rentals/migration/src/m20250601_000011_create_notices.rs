use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notices::AllotmentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Notices::Code)
                            .string_len(30)
                            .not_null()
                            .default("Other"),
                    )
                    .col(ColumnDef::new(Notices::Description).string_len(500))
                    .col(
                        ColumnDef::new(Notices::Ts)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notices::Table, Notices::AllotmentId)
                            .to(RoomAllotments::Table, RoomAllotments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Notices {
    Table,
    Id,
    AllotmentId,
    Code,
    Description,
    Ts,
}

#[derive(Iden)]
enum RoomAllotments {
    Table,
    Id,
}
