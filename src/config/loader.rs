//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll runs
//! from YAML files, either from a directory on disk or from sources embedded
//! in the binary.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, RosterFile, RunMetadata, SalesFile};

const BUILTIN_PAYROLL: &str = include_str!("../../config/december_2021/payroll.yaml");
const BUILTIN_ROSTER: &str = include_str!("../../config/december_2021/roster.yaml");
const BUILTIN_SALES: &str = include_str!("../../config/december_2021/sales.yaml");

/// Loads and provides access to a payroll run configuration.
///
/// # Directory Structure
///
/// ```text
/// config/december_2021/
/// ├── payroll.yaml   # Run name and reporting period
/// ├── roster.yaml    # Employees and sales team
/// └── sales.yaml     # Sales per employee name
/// ```
///
/// # Example
///
/// ```
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// assert_eq!(loader.config().roster().len(), 6);
/// assert_eq!(loader.config().period().month, 12);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads a run from the specified directory.
    ///
    /// Returns `ConfigNotFound` if a file is missing, `ConfigParseError` if a
    /// file is not valid YAML for its structure, and the validation errors of
    /// [`PayrollConfig::new`] otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let metadata = Self::load_yaml::<RunMetadata>(&payroll_path)?;

        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterFile>(&roster_path)?;

        let sales_path = path.join("sales.yaml");
        let sales = Self::load_yaml::<SalesFile>(&sales_path)?;

        Self::assemble(metadata, roster, sales)
    }

    /// Builds a run from in-memory YAML sources.
    pub fn from_yaml_sources(payroll: &str, roster: &str, sales: &str) -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<RunMetadata>(payroll, "payroll.yaml")?;
        let roster = Self::parse_yaml::<RosterFile>(roster, "roster.yaml")?;
        let sales = Self::parse_yaml::<SalesFile>(sales, "sales.yaml")?;

        Self::assemble(metadata, roster, sales)
    }

    /// Returns the December 2021 run compiled into the crate.
    pub fn builtin() -> EngineResult<Self> {
        Self::from_yaml_sources(BUILTIN_PAYROLL, BUILTIN_ROSTER, BUILTIN_SALES)
    }

    fn assemble(metadata: RunMetadata, roster: RosterFile, sales: SalesFile) -> EngineResult<Self> {
        let config = PayrollConfig::new(metadata, roster.employees, &roster.sales_team, sales.sales)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the validated run configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the run configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
