//! Command-line arguments

use clap::Parser;
use fyyur_common::config::{default_config_path, Overrides};
use std::path::PathBuf;

/// Command-line arguments for fyyur-web
///
/// Each flag falls back to its environment variable, then to the TOML file.
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue, artist and show listings")]
#[command(version)]
pub struct Args {
    /// TOML config file
    #[arg(short, long, env = "FYYUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FYYUR_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "FYYUR_DATABASE")]
    pub database: Option<PathBuf>,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            database_path: self.database.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
