use crate::bootstrap_config::BootstrapConfig;
use common::types::config::Config;
use log::info;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub(super) fn load_config(bootstrap_config: &BootstrapConfig) -> Result<Config, ConfigError> {
    let mut config = match &bootstrap_config.config_file {
        Some(path) => read_config(Path::new(path))?,
        None => {
            info!(target: "main", "No config file given, using defaults");
            Config::default()
        }
    };

    if let Some(api_key) = &bootstrap_config.api_key {
        let Config::Version1 { routing, .. } = &mut config;
        routing.api_key = Some(api_key.clone());
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|err| ConfigError::Open(path.to_path_buf(), err))?;
    let config: Config =
        serde_yml::from_str(&raw).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;

    info!(target: "main", "Config read successfully from '{path:?}'");

    Ok(config)
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    Open(PathBuf, std::io::Error),
    Parse(PathBuf, serde_yml::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Open(path, err) => write!(f, "Could not open '{}': {}", path.display(), err),
            ConfigError::Parse(path, err) => write!(f, "Could not parse '{}': {}", path.display(), err),
        }
    }
}
