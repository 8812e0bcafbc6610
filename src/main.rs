mod check;
mod cli;
mod utils;

use clap::Parser;
use check::RunConfig;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let result = RunConfig::new(&cli.repo, cli.timeout).and_then(|config| check::run_check(&config));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
