use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RentalDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RentalDetails::AllotmentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RentalDetails::Deposit).big_integer().not_null())
                    .col(ColumnDef::new(RentalDetails::Rent).big_integer().not_null())
                    .col(
                        ColumnDef::new(RentalDetails::Maintenance)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RentalDetails::RentTotal)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RentalDetails::Ts)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RentalDetails::Table, RentalDetails::AllotmentId)
                            .to(RoomAllotments::Table, RoomAllotments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RentalDetails {
    Table,
    Id,
    AllotmentId,
    Deposit,
    Rent,
    Maintenance,
    RentTotal,
    Ts,
}

#[derive(Iden)]
enum RoomAllotments {
    Table,
    Id,
}
