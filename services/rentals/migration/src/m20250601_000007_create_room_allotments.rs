use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAllotments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAllotments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomAllotments::PersonId).big_integer().not_null())
                    .col(ColumnDef::new(RoomAllotments::RoomId).big_integer().not_null())
                    .col(ColumnDef::new(RoomAllotments::StartDate).date().not_null())
                    .col(ColumnDef::new(RoomAllotments::EndDate).date().not_null())
                    .col(ColumnDef::new(RoomAllotments::ActualEndDate).date())
                    .col(
                        ColumnDef::new(RoomAllotments::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RoomAllotments::Ts)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomAllotments::Table, RoomAllotments::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomAllotments::Table, RoomAllotments::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability queries and the occupancy guard filter on (room, active).
        manager
            .create_index(
                Index::create()
                    .name("idx_room_allotments_room_active")
                    .table(RoomAllotments::Table)
                    .col(RoomAllotments::RoomId)
                    .col(RoomAllotments::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAllotments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RoomAllotments {
    Table,
    Id,
    PersonId,
    RoomId,
    StartDate,
    EndDate,
    ActualEndDate,
    IsActive,
    Ts,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
}
