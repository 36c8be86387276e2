use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::RoomNo).integer().not_null())
                    .col(ColumnDef::new(Rooms::FloorNo).small_integer().not_null())
                    .col(ColumnDef::new(Rooms::Address).string_len(255))
                    .col(ColumnDef::new(Rooms::Building).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Rooms::RoomCode)
                            .string_len(60)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::CodeName)
                            .string_len(60)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Area).integer())
                    .col(ColumnDef::new(Rooms::Layout).string_len(10))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    RoomNo,
    FloorNo,
    Address,
    Building,
    RoomCode,
    CodeName,
    Area,
    Layout,
}
