use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "freelane-cli", version, about = "Freelane CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule generation and overview
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Block progress (complete, fail, overdue check)
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Profile configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Block { action } => commands::block::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
