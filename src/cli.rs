use clap::Parser;
use std::path::PathBuf;

use crate::check::DEFAULT_TIMEOUT_SECS;

#[derive(Parser, Debug)]
#[command(name = "contribcheck")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Explain why commits may not count on a GitHub contribution graph", long_about = None)]
pub struct Cli {
    /// Repository to inspect
    #[arg(short = 'C', long, default_value = ".")]
    pub repo: PathBuf,

    /// Per-command timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log every git invocation to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_needed() {
        let cli = Cli::try_parse_from(["contribcheck"]).unwrap();
        assert_eq!(cli.repo, PathBuf::from("."));
        assert_eq!(cli.timeout, 30);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["contribcheck", "-C", "/tmp/repo", "--timeout", "5", "-v"]).unwrap();
        assert_eq!(cli.repo, PathBuf::from("/tmp/repo"));
        assert_eq!(cli.timeout, 5);
        assert!(cli.verbose);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
