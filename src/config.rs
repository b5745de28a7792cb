use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RailError, RailResult};

/// Dataset configuration used when assembling a rail network from files
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub stations_file: String,
    pub tracks_file: String,
    pub delimiter: char,
    pub directed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_file: "resources/stations.csv".to_string(),
            tracks_file: "resources/tracks.csv".to_string(),
            delimiter: ',',
            directed: false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> RailResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| RailError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RailResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RailError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
