//! Prints the December 2021 payroll summary.
//!
//! Diagnostics go to stderr (level `warn` unless `RUST_LOG` says otherwise);
//! stdout carries only the summary lines.

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payroll_engine::calculation::run_payroll;
use payroll_engine::config::ConfigLoader;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::builtin()
        .context("Failed to load the built-in payroll run")?
        .into_config();

    let report = run_payroll(&config);
    debug!(
        run_id = %report.run_id,
        audit_steps = report.audit_trace.steps.len(),
        warnings = report.audit_trace.warnings.len(),
        "Audit trace recorded"
    );

    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
