use clap::Parser;
use gaintracker::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
