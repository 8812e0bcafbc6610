//! Commit history checks: recent commit authorship and commit counts.

use crate::utils::types::{CommitEntry, Section};

const EMAIL_COLUMN: usize = 30;
const SHORT_HASH: usize = 7;

/// Parses `%h|%ae|%ad` lines. Lines without the delimiter are skipped.
pub fn parse_commits(raw: &str) -> Vec<CommitEntry> {
    raw.lines()
        .filter_map(|line| {
            let mut parts = line.trim().splitn(3, '|');
            let hash = parts.next()?;
            let email = parts.next()?;
            let date = parts.next().unwrap_or("");
            Some(CommitEntry {
                hash: hash.to_string(),
                email: email.to_string(),
                date: date.to_string(),
            })
        })
        .collect()
}

/// Distinct author emails in first-seen order.
pub fn distinct_emails(commits: &[CommitEntry]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for c in commits {
        if !seen.contains(&c.email.as_str()) {
            seen.push(&c.email);
        }
    }
    seen
}

pub fn check_commits(raw: &str, configured_email: &str) -> Section {
    let mut s = Section::new("RECENT COMMITS");
    let commits = parse_commits(raw);

    if commits.is_empty() {
        s.fail("No commits found")
            .record("No commits in repository", false);
        return s;
    }

    for c in &commits {
        let hash: String = c.hash.chars().take(SHORT_HASH).collect();
        let email: String = c.email.chars().take(EMAIL_COLUMN).collect();
        s.info(format!("{} {:<width$} {}", hash, email, c.date, width = EMAIL_COLUMN));
    }

    let emails = distinct_emails(&commits);
    if emails.contains(&configured_email) {
        s.pass(format!("Commits use configured email ({})", configured_email))
            .record("Commits use correct email", true);
    } else {
        // authorship mismatch may be intentional, so it only warns
        s.warn("Some commits use different email!")
            .info(format!("Configured: {}", configured_email))
            .info(format!("In commits: {}", emails.join(", ")));
    }

    s.warn("Email MUST be verified in GitHub!")
        .record("Commits exist", true);
    s
}

pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Display-only: contributes no verdict to the score.
pub fn check_statistics(since_year: i32, yearly_raw: &str, today_raw: &str) -> Section {
    let yearly = parse_count(yearly_raw);
    let today = parse_count(today_raw);
    let show = |n: Option<u64>| n.map(|v| v.to_string()).unwrap_or_else(|| "unknown".into());

    let mut s = Section::new("COMMIT STATISTICS");
    s.info(format!("Commits since {}: {}", since_year, show(yearly)))
        .info(format!("Commits today: {}", show(today)));

    match yearly {
        Some(n) if n > 0 => s.pass(format!("Repository has {} commits", n)),
        _ => s.warn("Very few commits found"),
    };
    s
}
