// Runtime configuration: command line flags with environment fallbacks

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

const DEFAULT_PORT: &str = "3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Seed once from the command line instead of serving
    pub once: bool,
}

impl Config {
    pub fn command() -> clap::Command {
        clap::Command::new("dashboard-seeder")
            .about("Resets the dashboard database and loads sample data")
            .arg(
                Arg::new("database_url")
                    .short('d')
                    .long("database-url")
                    .value_name("URL")
                    .env("POSTGRES_URL")
                    .required(true)
                    .help("PostgreSQL connection string"),
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .env("SEEDER_PORT")
                    .value_parser(value_parser!(u16))
                    .default_value(DEFAULT_PORT)
                    .help("Port to listen on"),
            )
            .arg(
                Arg::new("once")
                    .long("once")
                    .action(ArgAction::SetTrue)
                    .help("Seed the database once and exit"),
            )
    }

    pub fn from_args() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            database_url: matches
                .get_one::<String>("database_url")
                .cloned()
                .expect("database_url is a required argument"),
            port: *matches
                .get_one::<u16>("port")
                .expect("port has a default value"),
            once: matches.get_flag("once"),
        }
    }

    /// Parse the connection string, never allowing an unencrypted transport
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&self.database_url)
            .context("Invalid database connection string")?;
        Ok(require_tls(options))
    }
}

// Upgrade anything weaker than `require`; certificate-verifying modes stay as given
pub fn require_tls(options: PgConnectOptions) -> PgConnectOptions {
    match options.get_ssl_mode() {
        PgSslMode::Require | PgSslMode::VerifyCa | PgSslMode::VerifyFull => options,
        _ => options.ssl_mode(PgSslMode::Require),
    }
}
