use clap::Subcommand;
use freelane_core::{ProfileConfig, ProgressDb};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate today's schedule from the profile
    Generate {
        /// Override the profile segment (enterprise | consumer)
        #[arg(long)]
        segment: Option<String>,
        /// Override work start (HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// Override work end (HH:MM)
        #[arg(long)]
        end: Option<String>,
        /// Print the block list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's blocks with their progress
    Status,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Generate {
            segment,
            start,
            end,
            json,
        } => {
            let mut config = ProfileConfig::load_or_default();
            if let Some(segment) = segment {
                config.segment = segment.parse()?;
            }
            if let Some(start) = start {
                config.work_start = start.parse()?;
            }
            if let Some(end) = end {
                config.work_end = end.parse()?;
            }

            let db = ProgressDb::open_default()?;
            let blocks = super::todays_blocks(&config, &db)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                println!(
                    "{} day, {}–{} ({} blocks)",
                    config.segment, config.work_start, config.work_end, blocks.len()
                );
                for block in &blocks {
                    println!("{}", super::format_block_line(block));
                    for task in &block.suggested_tasks {
                        println!("      - {task}");
                    }
                    if let Some(tip) = &block.actionable_tip {
                        println!("      tip: {tip}");
                    }
                }
            }
        }
        ScheduleAction::Status => {
            let config = ProfileConfig::load_or_default();
            let db = ProgressDb::open_default()?;
            let blocks = super::todays_blocks(&config, &db)?;
            for block in &blocks {
                println!("{}", super::format_block_line(block));
            }
        }
    }
    Ok(())
}
