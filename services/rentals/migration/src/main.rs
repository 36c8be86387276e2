use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(rentman_rentals_migration::Migrator).await;
}
