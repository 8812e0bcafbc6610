pub mod command;
pub mod history;
pub mod identity;
pub mod inspector;
pub mod output;
pub mod remote;
pub mod report;
pub mod snapshot;

#[cfg(test)]
pub mod fake;

use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{ContribError, Result};
use inspector::GitInspector;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub repo: PathBuf,
    pub timeout: Duration,
}

impl RunConfig {
    pub fn new(repo: impl Into<PathBuf>, timeout_secs: u64) -> Result<Self> {
        let repo = repo.into();
        if !repo.is_dir() {
            return Err(ContribError::Config(format!(
                "repository path is not a directory: {}",
                repo.display()
            )));
        }
        if timeout_secs == 0 {
            return Err(ContribError::Config("timeout must be at least 1 second".to_string()));
        }
        Ok(RunConfig { repo, timeout: Duration::from_secs(timeout_secs) })
    }
}

pub fn run_check(config: &RunConfig) -> Result<()> {
    let inspector = GitInspector::new(&config.repo, config.timeout);

    eprintln!("Inspecting repository at {}...", inspector.repo().display());
    let now = chrono::Local::now();
    let snap = snapshot::gather(&inspector, now.date_naive());
    tracing::debug!(?snap, "gathered");

    let report = report::evaluate(
        &snap,
        &inspector.repo().display().to_string(),
        now.format("%Y-%m-%d %H:%M:%S %z").to_string(),
    );
    tracing::info!(passed = report.passed.len(), failed = report.failed.len(), "evaluated");

    print!("{}", output::render(&report));
    Ok(())
}
