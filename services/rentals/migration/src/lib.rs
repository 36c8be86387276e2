use sea_orm_migration::prelude::*;

mod m20250601_000001_create_persons;
mod m20250601_000002_create_contacts;
mod m20250601_000003_create_addresses;
mod m20250601_000004_create_docs;
mod m20250601_000005_create_rooms;
mod m20250601_000006_create_meter_details;
mod m20250601_000007_create_room_allotments;
mod m20250601_000008_create_room_allotment_extras;
mod m20250601_000009_create_rental_details;
mod m20250601_000010_create_rent_transactions;
mod m20250601_000011_create_notices;
mod m20250601_000012_create_outbox_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_persons::Migration),
            Box::new(m20250601_000002_create_contacts::Migration),
            Box::new(m20250601_000003_create_addresses::Migration),
            Box::new(m20250601_000004_create_docs::Migration),
            Box::new(m20250601_000005_create_rooms::Migration),
            Box::new(m20250601_000006_create_meter_details::Migration),
            Box::new(m20250601_000007_create_room_allotments::Migration),
            Box::new(m20250601_000008_create_room_allotment_extras::Migration),
            Box::new(m20250601_000009_create_rental_details::Migration),
            Box::new(m20250601_000010_create_rent_transactions::Migration),
            Box::new(m20250601_000011_create_notices::Migration),
            Box::new(m20250601_000012_create_outbox_events::Migration),
        ]
    }
}
