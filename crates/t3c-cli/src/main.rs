// Rust guideline compliant 2026-10-18

//! t3c CLI Application
//!
//! Command-line front-end for the install and configuration command set.

use clap::Parser;
use std::path::PathBuf;
use t3c_cli::{commands, init_tracing, Config};
use t3c_commands::{ServiceProvider, StaticContainer};
use t3c_console::{should_use_color, ConsoleOutput, Input, ProgressTarget, Terminal};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "t3c",
    version,
    about = "t3c: install and configuration commands for TYPO3 projects",
    after_help = "Examples:\n  t3c list\n  t3c show install:setup\n  t3c check --json\n  t3c self-test --steps 5\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List registered commands
    List,

    /// Show a single command
    Show {
        /// Command identifier, e.g. install:setup
        identifier: String,
    },

    /// Check whether the installation is configured
    Check,

    /// Exercise console output
    SelfTest {
        /// Number of progress steps
        #[arg(long, default_value_t = 20)]
        steps: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&std::env::current_dir()?)?,
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    let _guard = init_tracing(&config)?;
    debug!(?config, "Loaded configuration");

    let choice = if !cli.no_color && should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let terminal = match config.terminal_width {
        Some(width) => Terminal::fixed(width),
        None => Terminal::detect(),
    };
    let mut console = ConsoleOutput::with_output(StandardStream::stdout(choice))
        .with_input(Input::stdin())
        .with_terminal(terminal)
        .with_progress_target(ProgressTarget::Stdout);

    let manager = config.configuration_manager();
    let container = StaticContainer::for_project(manager.clone());
    let provider = ServiceProvider::from_container(&container)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => commands::list::execute(&mut console, &provider, cli.json)?,
        Commands::Show { identifier } => {
            commands::show::execute(&mut console, &provider, &container, &identifier, cli.json)?
        }
        Commands::Check => {
            commands::check::execute(&mut console, &manager, provider.readiness(), cli.json)?
        }
        Commands::SelfTest { steps } => commands::self_test::execute(&mut console, steps)?,
    }

    Ok(())
}
