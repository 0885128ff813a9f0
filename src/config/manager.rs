use super::{
    evolution::EvolutionConfig, mutation::MutationConfig, sampling::SamplingConfig,
    traits::ConfigSection,
};
use crate::error::SdfEvoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub mutation: MutationConfig,
    pub sampling: SamplingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SdfEvoError> {
        self.evolution.validate()?;
        self.mutation.validate()?;
        self.sampling.validate()?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SdfEvoError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| SdfEvoError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, SdfEvoError> {
        toml::to_string_pretty(self)
            .map_err(|e| SdfEvoError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

/// Shared, validated application configuration
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SdfEvoError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SdfEvoError::Configuration(format!("Failed to read config: {}", e)))?;

        let config = AppConfig::from_toml_str(&contents)?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        log::info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SdfEvoError> {
        let path = path.as_ref();
        let toml_str = self.get().to_toml_string()?;

        std::fs::write(path, toml_str)
            .map_err(|e| SdfEvoError::Configuration(format!("Failed to write config: {}", e)))?;

        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Applies `f` and keeps the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), SdfEvoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
