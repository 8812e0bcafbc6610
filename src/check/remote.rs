//! Remote hosting and push-state checks.

use crate::check::identity::EMAIL_SETTINGS_URL;
use crate::utils::types::Section;

pub const HOSTING_DOMAIN: &str = "github.com";
const PROFILE_SETTINGS_URL: &str = "https://github.com/settings/profile";

/// Account or organization owning the repository.
///
/// Handles both `https://github.com/<account>/repo` and the scp-like
/// `git@github.com:<account>/repo` remote syntax.
pub fn extract_account(url: &str) -> Option<&str> {
    let rest = [format!("{}/", HOSTING_DOMAIN), format!("{}:", HOSTING_DOMAIN)]
        .iter()
        .find_map(|marker| url.find(marker.as_str()).map(|i| i + marker.len()))
        .map(|start| &url[start..])?;

    let account = rest.split('/').next().unwrap_or("");
    if account.is_empty() { None } else { Some(account) }
}

pub fn check_remote(url: &str) -> Section {
    let mut s = Section::new("REMOTE REPOSITORY");
    s.info(format!("Remote URL: {}", url));

    if url.contains(HOSTING_DOMAIN) {
        s.pass("GitHub repository")
            .record("Repository is on GitHub", true);
    } else {
        s.fail("Not a GitHub repository!")
            .record("Not a GitHub repository", false);
    }

    if let Some(account) = extract_account(url) {
        s.info(format!("GitHub Profile: https://{}/{}", HOSTING_DOMAIN, account))
            .info(format!("Email Settings: {}", EMAIL_SETTINGS_URL))
            .info(format!("Privacy Settings: {}", PROFILE_SETTINGS_URL));
    }
    s
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    InSync,
    Ahead,
    Unknown,
}

pub fn sync_state(local: &str, upstream: &str) -> SyncState {
    if local.is_empty() || upstream.is_empty() {
        SyncState::Unknown
    } else if local == upstream {
        SyncState::InSync
    } else {
        SyncState::Ahead
    }
}

pub fn check_push(local: &str, upstream: &str) -> Section {
    let mut s = Section::new("PUSH STATUS");

    match sync_state(local, upstream) {
        SyncState::InSync => {
            s.pass("Local and remote in sync (pushed)")
                .record("Changes pushed to GitHub", true);
        }
        SyncState::Ahead => {
            // unequal hashes also cover "behind"; unpushed work is the common case
            s.warn("Local ahead of remote - need to push!")
                .info("Fix: git push")
                .record("Changes not pushed yet", false);
        }
        SyncState::Unknown => {
            s.warn("Cannot verify push status");
        }
    }
    s
}
