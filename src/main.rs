use clap::Parser;
use meshlint::cli::Cli;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> meshlint::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    meshlint::run_command(cli.command)
}
