mod cli;
mod export;
mod resolver;

use clap::Parser;
use cli::Cli;
use export::Exporter;
use export::destination::Destination;
use export::sink::FsSink;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bridge = resolver::bridge_for(cli.backend);
    let destination = Destination::from_project_root(&cli.project_root);
    let saved = Exporter::new(bridge.as_ref(), &FsSink, destination).export();

    // The result only affects the exit status with --strict.
    if cli.strict && !saved {
        std::process::exit(1);
    }
}
