//! Raw answers gathered from the inspector, in check order.

use chrono::{Datelike, NaiveDate};

use crate::check::inspector::RepoInspector;

pub const RECENT_COMMIT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub today: NaiveDate,
    pub email: String,
    pub current_branch: String,
    pub default_branch: String,
    pub recent_commits: String,
    pub remote_url: String,
    pub local_hash: String,
    pub upstream_hash: String,
    pub commits_since_last_year: String,
    pub commits_today: String,
}

impl Snapshot {
    /// The year the commit statistics start from: January 1 of last year.
    pub fn stats_year(&self) -> i32 {
        self.today.year() - 1
    }

    /// True when git answered none of the queries.
    pub fn is_empty(&self) -> bool {
        [
            &self.email,
            &self.current_branch,
            &self.default_branch,
            &self.recent_commits,
            &self.remote_url,
            &self.local_hash,
            &self.upstream_hash,
            &self.commits_since_last_year,
            &self.commits_today,
        ]
        .iter()
        .all(|s| s.is_empty())
    }
}

pub fn gather(inspector: &dyn RepoInspector, today: NaiveDate) -> Snapshot {
    let year_start = NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap_or(today);

    Snapshot {
        today,
        email:                   inspector.configured_email(),
        current_branch:          inspector.current_branch(),
        default_branch:          inspector.remote_default_branch(),
        recent_commits:          inspector.recent_commits(RECENT_COMMIT_LIMIT),
        remote_url:              inspector.remote_url(),
        local_hash:              inspector.head_hash(),
        upstream_hash:           inspector.upstream_hash(),
        commits_since_last_year: inspector.commit_count_since(year_start),
        commits_today:           inspector.commit_count_since(today),
    }
}
