use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;
use vendo::machine::VendingMachine;
use vendo::shell::Shell;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    // Filter is overridable via RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(VendingMachine::new(), stdin.lock(), stdout.lock());
    shell.run().into_diagnostic()?;

    Ok(())
}
