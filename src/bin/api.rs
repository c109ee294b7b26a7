//! Notes API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use clap::Parser;
use miette::Diagnostic;
use notes_api::api;
use notes_api::config::Settings;
use notes_api::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(notes::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(
        code(notes::binary::server),
        help("Is another process already listening on this port? Try --port or PORT.")
    )]
    Server(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let settings = Settings::parse();
    api::init_tracing();

    serve(settings).await?;
    Ok(())
}

async fn serve(settings: Settings) -> Result<(), BinaryError> {
    let db = SqliteDatabase::connect(&settings.database_url).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(settings.api_config(), db).await?;
    Ok(())
}
