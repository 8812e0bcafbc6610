//! Read-only queries against a local git repository.
//! Every answer is trimmed text; any failure is an empty string.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::check::command::run_with_timeout;
use crate::utils::ContribError;

const ORIGIN_HEAD_PREFIX: &str = "refs/remotes/origin/";

pub trait RepoInspector {
    fn configured_email(&self) -> String;
    fn current_branch(&self) -> String;
    /// Branch `origin/HEAD` points at, without the `refs/remotes/origin/` prefix.
    fn remote_default_branch(&self) -> String;
    /// One `hash|email|date` line per commit, newest first.
    fn recent_commits(&self, limit: usize) -> String;
    fn remote_url(&self) -> String;
    fn head_hash(&self) -> String;
    fn upstream_hash(&self) -> String;
    /// Number of commits reachable from HEAD made on or after `since`.
    fn commit_count_since(&self, since: NaiveDate) -> String;
}

// ── git ─────────────────────────────────────────────────────────────────────

pub struct GitInspector {
    repo: PathBuf,
    timeout: Duration,
}

impl GitInspector {
    pub fn new(repo: impl Into<PathBuf>, timeout: Duration) -> Self {
        GitInspector { repo: repo.into(), timeout }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    fn git(&self, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.repo)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_PAGER", "cat");

        match run_with_timeout(cmd, self.timeout) {
            Ok(out) => {
                tracing::debug!(args = ?args, bytes = out.len(), "git ok");
                out
            }
            Err(e @ ContribError::Timeout { .. }) => {
                tracing::warn!(args = ?args, "{}", e);
                String::new()
            }
            Err(e) => {
                tracing::debug!(args = ?args, "{}", e);
                String::new()
            }
        }
    }
}

impl RepoInspector for GitInspector {
    fn configured_email(&self) -> String {
        self.git(&["config", "user.email"])
    }

    fn current_branch(&self) -> String {
        self.git(&["branch", "--show-current"])
    }

    fn remote_default_branch(&self) -> String {
        let head = self.git(&["symbolic-ref", "refs/remotes/origin/HEAD"]);
        strip_origin_prefix(&head).to_string()
    }

    fn recent_commits(&self, limit: usize) -> String {
        let count = format!("-{}", limit);
        self.git(&["log", "--pretty=format:%h|%ae|%ad", "--date=short", &count])
    }

    fn remote_url(&self) -> String {
        self.git(&["remote", "get-url", "origin"])
    }

    fn head_hash(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    fn upstream_hash(&self) -> String {
        self.git(&["rev-parse", "@{u}"])
    }

    fn commit_count_since(&self, since: NaiveDate) -> String {
        let since = format!("--since={} 00:00:00", since.format("%Y-%m-%d"));
        self.git(&["rev-list", "--count", &since, "HEAD"])
    }
}

fn strip_origin_prefix(reference: &str) -> &str {
    reference.strip_prefix(ORIGIN_HEAD_PREFIX).unwrap_or(reference)
}
