pub mod hours;
pub mod init;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create or edit the project/milestone/ticket hours file")]
    Hours(hours::HoursArgs),
    #[command(about = "Load a week of time records into ActiveCollab")]
    Sync(sync::SyncArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Hours(args) => hours::cmd(args),
            Commands::Sync(args) => sync::cmd(args).await,
        }
    }
}
