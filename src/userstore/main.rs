use clap::Parser;
use colored::*;
use std::io::Write;
use tracing_subscriber::{fmt, EnvFilter};
use userstore::api::{perform, CmdMessage, MessageLevel};
use userstore::error::Result;

mod args;
use args::{normalize_single_dash_flags, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_single_dash_flags(std::env::args_os()));
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = perform(&cli.arguments(), &mut out)?;
    out.flush()?;

    if cli.verbose {
        print_messages(&result.messages);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "userstore=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Messages go to stderr; stdout carries only query output.
fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
