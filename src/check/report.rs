//! Report model: sections in check order plus the passed/failed tallies.

use crate::check::history::{check_commits, check_statistics};
use crate::check::identity::{check_branch, check_email, resolve_default_branch};
use crate::check::remote::{check_push, check_remote};
use crate::check::snapshot::Snapshot;
use crate::utils::types::Section;

pub const BAR_WIDTH: usize = 50;
pub const NO_DATA_NOTICE: &str =
    "No data could be gathered from git (not a repository, or git not on PATH)";

#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub generated_at: String,
    pub repository: String,
    pub email: String,
    pub default_branch: String,
    /// Set when every query came back empty.
    pub notice: Option<String>,
    pub sections: Vec<Section>,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl DiagnosticReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    pub fn percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.passed.len() as f64 / total as f64 * 100.0,
        }
    }

    pub fn bar_fill(&self, width: usize) -> usize {
        match self.total() {
            0 => 0,
            total => width * self.passed.len() / total,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn evaluate(snap: &Snapshot, repository: &str, generated_at: String) -> DiagnosticReport {
    let sections = vec![
        check_email(&snap.email),
        check_branch(&snap.current_branch, &snap.default_branch),
        check_commits(&snap.recent_commits, &snap.email),
        check_remote(&snap.remote_url),
        check_push(&snap.local_hash, &snap.upstream_hash),
        check_statistics(snap.stats_year(), &snap.commits_since_last_year, &snap.commits_today),
    ];

    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for v in sections.iter().flat_map(|s| &s.verdicts) {
        if v.passed {
            passed.push(v.label.clone());
        } else {
            failed.push(v.label.clone());
        }
    }

    DiagnosticReport {
        generated_at,
        repository: repository.to_string(),
        email: snap.email.clone(),
        default_branch: resolve_default_branch(&snap.default_branch).to_string(),
        notice: snap.is_empty().then(|| NO_DATA_NOTICE.to_string()),
        sections,
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::fake::FakeInspector;
    use crate::check::snapshot::gather;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn report_for(fake: &FakeInspector) -> DiagnosticReport {
        evaluate(&gather(fake, today()), ".", "2026-10-16 09:00:00".into())
    }

    #[test]
    fn healthy_repository_passes_everything() {
        let r = report_for(&FakeInspector::healthy());
        assert!(r.all_passed());
        assert_eq!(
            r.passed,
            vec![
                "Email configured in git",
                "On default branch",
                "Commits use correct email",
                "Commits exist",
                "Repository is on GitHub",
                "Changes pushed to GitHub",
            ]
        );
        assert_eq!(r.percentage(), 100.0);
        assert_eq!(r.bar_fill(BAR_WIDTH), BAR_WIDTH);
    }

    #[test]
    fn broken_repository_fails_the_four_core_checks() {
        let fake = FakeInspector {
            current_branch: "feature".into(),
            default_branch: "main".into(),
            remote_url: "https://gitlab.com/acme/tool.git".into(),
            ..Default::default()
        };
        let r = report_for(&fake);
        assert!(r.passed.is_empty());
        assert_eq!(
            r.failed,
            vec![
                "Email not configured",
                "Not on default branch",
                "No commits in repository",
                "Not a GitHub repository",
            ]
        );
        assert_eq!(r.percentage(), 0.0);
        assert_eq!(r.bar_fill(BAR_WIDTH), 0);
    }

    #[test]
    fn nothing_gathered_still_yields_a_report() {
        let r = report_for(&FakeInspector::default());
        // detached/empty branch vs fallback "main" counts as a mismatch
        assert_eq!(r.default_branch, "main");
        assert_eq!(r.failed.len(), 4);
        assert_eq!(r.sections.len(), 6);
        assert_eq!(r.notice.as_deref(), Some(NO_DATA_NOTICE));
    }

    #[test]
    fn partial_answers_carry_no_notice() {
        let fake = FakeInspector { email: "dev@example.com".into(), ..Default::default() };
        assert_eq!(report_for(&fake).notice, None);
        assert_eq!(report_for(&FakeInspector::healthy()).notice, None);
    }

    #[test]
    fn score_and_bar_round_down() {
        let fake = FakeInspector {
            upstream_hash: "ffffffff".into(),
            ..FakeInspector::healthy()
        };
        let r = report_for(&fake);
        assert_eq!(r.passed.len(), 5);
        assert_eq!(r.failed, vec!["Changes not pushed yet"]);
        assert_eq!(r.bar_fill(BAR_WIDTH), 41);
        assert_eq!(format!("{:.0}", r.percentage()), "83");
    }

    #[test]
    fn empty_report_scores_zero() {
        let r = DiagnosticReport {
            generated_at: String::new(),
            repository: String::new(),
            email: String::new(),
            default_branch: "main".into(),
            notice: None,
            sections: vec![],
            passed: vec![],
            failed: vec![],
        };
        assert_eq!(r.percentage(), 0.0);
        assert_eq!(r.bar_fill(BAR_WIDTH), 0);
    }
}
