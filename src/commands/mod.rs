pub mod browse;
pub mod export;
pub mod init;
pub mod status;
pub mod strip;
pub mod week;

use crate::libs::{config::Config, roster::Roster};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the school-day strip around today")]
    Strip(strip::StripArgs),
    #[command(about = "Show weekly attendance")]
    Week(week::WeekArgs),
    #[command(about = "Show attendance status on a day")]
    Status(status::StatusArgs),
    #[command(about = "Browse children and days interactively")]
    Browse(browse::BrowseArgs),
    #[command(about = "Export weekly attendance to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Strip(args) => strip::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Browse(args) => browse::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Reads the configuration and the roster it (or `explicit`) points at.
pub(crate) fn load_roster(explicit: Option<PathBuf>) -> Result<(Config, Roster)> {
    let config = Config::read()?;
    let path = Roster::resolve_path(explicit, &config)?;
    let roster = Roster::load(&path)?;
    Ok((config, roster))
}
