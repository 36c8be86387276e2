use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RentTransactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // The unique constraint is the uniqueness guarantee for
                    // generated transaction numbers; a violation is retryable.
                    .col(
                        ColumnDef::new(RentTransactions::TnxNo)
                            .string_len(40)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(RentTransactions::AllotmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RentTransactions::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(RentTransactions::IsRent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RentTransactions::PaymentMode)
                            .string_len(30)
                            .not_null()
                            .default("Cash"),
                    )
                    .col(ColumnDef::new(RentTransactions::Comment).string_len(255))
                    .col(ColumnDef::new(RentTransactions::Receipt).string_len(255))
                    .col(
                        ColumnDef::new(RentTransactions::Ts)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RentTransactions::Table, RentTransactions::AllotmentId)
                            .to(RoomAllotments::Table, RoomAllotments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentTransactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RentTransactions {
    Table,
    Id,
    TnxNo,
    AllotmentId,
    Amount,
    IsRent,
    PaymentMode,
    Comment,
    Receipt,
    Ts,
}

#[derive(Iden)]
enum RoomAllotments {
    Table,
    Id,
}
