//! Profile Login CLI - login form and profile screen in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use profile_login_core::config::Config;

mod commands;
mod logging;
mod output;
mod terminal;

/// Profile login demo - log in to see the profile
#[derive(Parser)]
#[command(name = "profile-login", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Profile picture to show after login (PNG)
    #[arg(long, global = true)]
    picture: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the login form (default)
    Run,

    /// Show the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = commands::get_config_dir();
    let config = Config::load(&config_dir)?;

    let color = output::use_color(config.color, cli.no_color);
    if !color {
        output::disable_colors();
    }
    logging::init_logging(cli.verbose, color);

    let picture = cli.picture.as_deref();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&config, picture),
        Commands::Config { json } => commands::config::run(&config_dir, &config, picture, json),
    }
}
