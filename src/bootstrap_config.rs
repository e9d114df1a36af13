use clap::{Parser, Subcommand};
use common::types::Coordinate;
use log::LevelFilter;

#[derive(Parser, Clone)]
#[command(version, about)]
pub struct BootstrapConfig {
    /// YAML config file, built-in defaults are used when omitted
    #[clap(short('c'), long("config"), env("TRIPMATCH_CONFIG"))]
    pub config_file: Option<String>,
    #[clap(short('l'), long("log-level"), env("TRIPMATCH_LOG_LEVEL"), default_value_t, value_enum)]
    pub log_level: LogLevel,
    /// Overrides the api key of the routing service from the config file
    #[clap(long("api-key"), env("TRIPMATCH_API_KEY"), hide_env_values = true)]
    pub api_key: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

impl BootstrapConfig {
    pub fn read() -> Self {
        BootstrapConfig::parse()
    }
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Serve the matching API
    Serve,
    /// Rank all trips for a single request and print them
    Match {
        /// Customer origin as "lat,lng"
        #[clap(long("from"))]
        origin: Coordinate,
        /// Customer destination as "lat,lng"
        #[clap(long("to"))]
        destination: Coordinate,
    },
    /// List the trip catalog
    Trips,
}

#[derive(clap::ValueEnum, Clone, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
