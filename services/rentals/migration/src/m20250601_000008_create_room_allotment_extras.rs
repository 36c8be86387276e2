use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAllotmentExtras::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAllotmentExtras::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomAllotmentExtras::AllotmentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(bool_col(RoomAllotmentExtras::AggAvailable))
                    .col(bool_col(RoomAllotmentExtras::IsPainted))
                    .col(bool_col(RoomAllotmentExtras::IsWaterTank))
                    .col(bool_col(RoomAllotmentExtras::IsGrill))
                    .col(bool_col(RoomAllotmentExtras::IsEleBillClear))
                    .col(
                        ColumnDef::new(RoomAllotmentExtras::Ts)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomAllotmentExtras::Table, RoomAllotmentExtras::AllotmentId)
                            .to(RoomAllotments::Table, RoomAllotments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAllotmentExtras::Table).to_owned())
            .await
    }
}

fn bool_col(name: RoomAllotmentExtras) -> ColumnDef {
    ColumnDef::new(name)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(Iden)]
enum RoomAllotmentExtras {
    Table,
    Id,
    AllotmentId,
    AggAvailable,
    IsPainted,
    IsWaterTank,
    IsGrill,
    IsEleBillClear,
    Ts,
}

#[derive(Iden)]
enum RoomAllotments {
    Table,
    Id,
}
