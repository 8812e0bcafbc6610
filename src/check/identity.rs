//! Committer identity and branch checks.

use crate::utils::types::Section;

pub const FALLBACK_DEFAULT_BRANCH: &str = "main";
pub const EMAIL_SETTINGS_URL: &str = "https://github.com/settings/emails";

pub fn check_email(email: &str) -> Section {
    let mut s = Section::new("EMAIL CONFIGURATION");
    s.info(format!("Git email: {}", email));

    if email.is_empty() {
        s.fail("No email configured!")
            .info("Fix: git config --global user.email 'your@email.com'")
            .record("Email not configured", false);
    } else {
        s.pass("Email configured")
            .warn(format!("Must be VERIFIED at: {}", EMAIL_SETTINGS_URL))
            .record("Email configured in git", true);
    }
    s
}

/// Empty means the remote's default branch could not be determined.
pub fn resolve_default_branch(reported: &str) -> &str {
    if reported.is_empty() { FALLBACK_DEFAULT_BRANCH } else { reported }
}

pub fn check_branch(current: &str, default: &str) -> Section {
    let default = resolve_default_branch(default);

    let mut s = Section::new("BRANCH CHECK");
    s.info(format!("Current branch: {}", current))
        .info(format!("Default branch: {}", default));

    if current == default {
        s.pass("On default branch (contributions will count)")
            .record("On default branch", true);
    } else {
        s.fail("NOT on default branch!")
            .info(format!("Fix: git checkout {}", default))
            .record("Not on default branch", false);
    }
    s
}
