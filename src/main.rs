//! layerkv command-line interface.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use layerkv::executor::CommandProcessor;
use layerkv::shell::{Repl, ReplConfig, ShellResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Interactive in-memory key-value store with nested transactions.
#[derive(Debug, Parser)]
#[command(name = "layerkv", version, about, long_about = None)]
struct Cli {
    /// Replay commands from a file instead of reading stdin
    script: Option<PathBuf>,

    /// Run the given command and exit (repeatable, runs in order)
    #[arg(short, long = "execute", value_name = "CMD", conflicts_with = "script")]
    execute: Vec<String>,

    /// Prompt printed before each line is read
    #[arg(long, default_value = "")]
    prompt: String,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ShellResult<()> {
    let config = ReplConfig::default()
        .prompt(cli.prompt)
        .banner(!cli.no_banner && cli.execute.is_empty());
    let mut repl = Repl::with_config(CommandProcessor::new(), config);

    if !cli.execute.is_empty() {
        let mut stdout = io::stdout().lock();
        for command in &cli.execute {
            repl.execute(command, &mut stdout)?;
        }
        stdout.flush()?;
        return Ok(());
    }

    match cli.script {
        Some(path) => repl.run_file(path),
        None => repl.run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_conflicts_with_script() {
        let err = Cli::try_parse_from(["layerkv", "-e", "GET a", "cmds.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_execute_repeatable() {
        let cli = Cli::try_parse_from(["layerkv", "-e", "SET a 1", "-e", "GET a"]).unwrap();
        assert_eq!(cli.execute, vec!["SET a 1", "GET a"]);
        assert!(cli.script.is_none());
    }
}
