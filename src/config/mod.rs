//! Configuration loading and management for the severance engine.
//!
//! This module provides functionality to load the statutory configuration
//! from YAML files: labor-code metadata and the statutory parameters used
//! by the calculation rules.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pt_labor_code").unwrap();
//! println!("Loaded statute: {}", config.law().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LawMetadata, StatutoryConfig, StatutoryParams};
