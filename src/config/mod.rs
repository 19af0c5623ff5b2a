//! Configuration loading and management for the payroll engine.
//!
//! This module loads a payroll run (reporting period, roster, sales team and
//! sales figures) from YAML and validates it.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/december_2021").unwrap();
//! println!("Loaded run: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, RosterFile, RunMetadata, SalesFile};
