pub mod add;
pub mod create;
pub mod init;
pub mod meetings;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create today's daily report")]
    Create(create::CreateArgs),
    #[command(about = "Add a timestamped entry to today's report")]
    Add(add::AddArgs),
    #[command(about = "Render the day's calendar meetings")]
    Meetings(meetings::MeetingsArgs),
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
            Commands::Create(args) => create::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Meetings(args) => meetings::cmd(args).await,
        }
    }
}
