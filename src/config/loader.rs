//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! statutory configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LawMetadata, StatutoryConfig, StatutoryParams};

/// Loads and provides access to the statutory configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/pt_labor_code/
/// ├── law.yaml         # Statute metadata
/// └── parameters.yaml  # Statutory calculation parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pt_labor_code").unwrap();
/// println!("Statute: {}", loader.law().statute);
/// println!("Training hours/year: {}", loader.params().annual_training_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/pt_labor_code")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if a
    /// required file is missing, contains invalid YAML, or lacks a
    /// required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let law_path = path.join("law.yaml");
        let law = Self::load_yaml::<LawMetadata>(&law_path)?;

        let params_path = path.join("parameters.yaml");
        let params = Self::load_yaml::<StatutoryParams>(&params_path)?;

        Ok(Self {
            config: StatutoryConfig { law, params },
        })
    }

    /// Builds a loader from the built-in statutory defaults, without
    /// touching the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            config: StatutoryConfig {
                law: LawMetadata {
                    name: "Código do Trabalho".to_string(),
                    statute: "Lei n.º 7/2009, de 12 de fevereiro".to_string(),
                    source_url: "https://dre.pt/dre/detalhe/lei/7-2009-484818".to_string(),
                },
                params: StatutoryParams::default(),
            },
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the statute metadata.
    pub fn law(&self) -> &LawMetadata {
        &self.config.law
    }

    /// Returns the statutory calculation parameters.
    pub fn params(&self) -> &StatutoryParams {
        &self.config.params
    }
}
