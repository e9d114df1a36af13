pub mod matching;

use crate::types::Trip;
use crate::util::timeout::Timeout;
use matching::MatchingConfig;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1")]
    Version1 {
        #[serde(default)]
        routing: RoutingConfig,
        #[serde(default)]
        matching: MatchingConfig,
        #[serde(default)]
        server: ServerConfig,
        /// Replaces the built-in trip catalog when present
        #[serde(default)]
        trips: Option<Vec<Trip>>,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::Version1 {
            routing: RoutingConfig::default(),
            matching: MatchingConfig::default(),
            server: ServerConfig::default(),
            trips: None,
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1/";
pub const DEFAULT_TIMEOUT: Timeout = Timeout(Duration::from_secs(10));

/// Where and how to reach the routing/geocoding service
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RoutingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// `null` disables the timeout entirely
    #[serde(default = "default_timeout")]
    pub timeout: Option<Timeout>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            profile: default_profile(),
            locale: default_locale(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

fn default_profile() -> String {
    "car".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timeout() -> Option<Timeout> {
    Some(DEFAULT_TIMEOUT)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}
