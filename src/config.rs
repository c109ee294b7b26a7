//! Server settings.
//!
//! Every setting can be given as a command-line flag or through the
//! environment. Precedence: flag > environment > default.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::api::{self, DEFAULT_PORT};

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://notes.db";

#[derive(Parser, Debug, Clone)]
#[command(name = "notes-api")]
#[command(author, version, about = "Notes REST API server", long_about = None)]
pub struct Settings {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Datastore connection string (e.g. sqlite://notes.db or sqlite::memory:)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Directory of static front-end files served for unmatched paths
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Settings {
    /// Server configuration derived from these settings.
    pub fn api_config(&self) -> api::Config {
        api::Config {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir.clone(),
        }
    }
}
