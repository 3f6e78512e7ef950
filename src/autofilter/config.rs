use crate::error::{AutofilterError, Result};
use crate::store::DEFAULT_FILTERS_VARIABLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROJECT_FILE: &str = "project.json";

/// Configuration for autofilter, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutofilterConfig {
    /// Project variable that holds the filter definitions
    #[serde(default = "default_filters_variable")]
    pub filters_variable: String,

    /// Project document opened when none is given on the command line
    #[serde(default = "default_project_file")]
    pub project_file: String,
}

fn default_filters_variable() -> String {
    DEFAULT_FILTERS_VARIABLE.to_string()
}

fn default_project_file() -> String {
    DEFAULT_PROJECT_FILE.to_string()
}

impl Default for AutofilterConfig {
    fn default() -> Self {
        Self {
            filters_variable: default_filters_variable(),
            project_file: default_project_file(),
        }
    }
}

impl AutofilterConfig {
    pub const KEYS: [&'static str; 2] = ["filters-variable", "project-file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AutofilterError::Io)?;
        let config: AutofilterConfig =
            serde_json::from_str(&content).map_err(AutofilterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AutofilterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AutofilterError::Serialization)?;
        fs::write(config_path, content).map_err(AutofilterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "filters-variable" => Some(self.filters_variable.clone()),
            "project-file" => Some(self.project_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AutofilterError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "filters-variable" => self.filters_variable = value.to_string(),
            "project-file" => self.project_file = value.to_string(),
            _ => {
                return Err(AutofilterError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
