//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (a `.env` file is honoured) and runs the requested
//! migration command, e.g. `migration up` or `migration fresh`.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // run_cli installs its own tracing subscriber.
    cli::run_cli(migration::Migrator).await;
}
