//! In-memory inspector for tests.

use chrono::NaiveDate;
use std::cell::Cell;
use std::collections::HashMap;

use crate::check::inspector::RepoInspector;

#[derive(Default)]
pub struct FakeInspector {
    pub email: String,
    pub current_branch: String,
    pub default_branch: String,
    pub commits: String,
    pub remote_url: String,
    pub local_hash: String,
    pub upstream_hash: String,
    pub counts: HashMap<NaiveDate, String>,
    pub limit: Cell<Option<usize>>,
}

impl FakeInspector {
    /// A repository where every check passes.
    pub fn healthy() -> Self {
        FakeInspector {
            email: "dev@example.com".into(),
            current_branch: "main".into(),
            default_branch: "main".into(),
            commits: "a1b2c3d|dev@example.com|2026-10-15\n\
                      e4f5a6b|dev@example.com|2026-10-14"
                .into(),
            remote_url: "git@github.com:octocat/hello.git".into(),
            local_hash: "a1b2c3d4e5f6".into(),
            upstream_hash: "a1b2c3d4e5f6".into(),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, since: NaiveDate, count: &str) -> Self {
        self.counts.insert(since, count.to_string());
        self
    }

    pub fn requested_limit(&self) -> Option<usize> {
        self.limit.get()
    }
}

impl RepoInspector for FakeInspector {
    fn configured_email(&self) -> String {
        self.email.clone()
    }

    fn current_branch(&self) -> String {
        self.current_branch.clone()
    }

    fn remote_default_branch(&self) -> String {
        self.default_branch.clone()
    }

    fn recent_commits(&self, limit: usize) -> String {
        self.limit.set(Some(limit));
        self.commits.clone()
    }

    fn remote_url(&self) -> String {
        self.remote_url.clone()
    }

    fn head_hash(&self) -> String {
        self.local_hash.clone()
    }

    fn upstream_hash(&self) -> String {
        self.upstream_hash.clone()
    }

    fn commit_count_since(&self, since: NaiveDate) -> String {
        self.counts.get(&since).cloned().unwrap_or_default()
    }
}
