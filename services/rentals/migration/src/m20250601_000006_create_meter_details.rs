use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeterDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MeterDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MeterDetails::RoomId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(MeterDetails::MeterNo)
                            .string_len(12)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MeterDetails::BuCode).small_integer().not_null())
                    .col(
                        ColumnDef::new(MeterDetails::ConsumerType)
                            .string_len(12)
                            .not_null()
                            .default("LT"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MeterDetails::Table, MeterDetails::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeterDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MeterDetails {
    Table,
    Id,
    RoomId,
    MeterNo,
    BuCode,
    ConsumerType,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
}
