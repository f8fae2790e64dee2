use chrono::Utc;
use clap::Subcommand;
use freelane_core::hydrate::{ProgressRecord, ProgressStore};
use freelane_core::{auto_fail_overdue, Event, ProfileConfig, ProgressDb};

#[derive(Subcommand)]
pub enum BlockAction {
    /// Mark a block as completed
    Complete {
        /// Block id (e.g. "block-warmup")
        id: String,
    },
    /// Mark a block as failed ("couldn't do it")
    Fail {
        /// Block id
        id: String,
    },
    /// Fail every pending block past its end time (run periodically)
    Check,
}

pub fn run(action: BlockAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ProfileConfig::load_or_default();
    let db = ProgressDb::open_default()?;
    let mut blocks = super::todays_blocks(&config, &db)?;
    let today = chrono::Local::now().date_naive();

    match action {
        BlockAction::Complete { id } => {
            let block = blocks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| format!("no block with id '{id}' in today's schedule"))?;
            block.complete()?;
            persist(&db, &config, &blocks, today)?;
            emit(&Event::BlockCompleted {
                block_id: id,
                at: Utc::now(),
            })?;
        }
        BlockAction::Fail { id } => {
            let block = blocks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| format!("no block with id '{id}' in today's schedule"))?;
            block.fail()?;
            persist(&db, &config, &blocks, today)?;
            emit(&Event::BlockFailed {
                block_id: id,
                auto: false,
                at: Utc::now(),
            })?;
        }
        BlockAction::Check => {
            let now = chrono::Local::now().time();
            let flipped =
                auto_fail_overdue(&mut blocks, now, config.work_start, config.work_end);
            if flipped.is_empty() {
                println!("nothing overdue");
                return Ok(());
            }
            persist(&db, &config, &blocks, today)?;
            for block_id in flipped {
                emit(&Event::BlockFailed {
                    block_id,
                    auto: true,
                    at: Utc::now(),
                })?;
            }
        }
    }
    Ok(())
}

/// Write the day's state back, keeping any stored custom task lists.
fn persist(
    db: &ProgressDb,
    config: &ProfileConfig,
    blocks: &[freelane_core::TimeBlock],
    today: chrono::NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut record = ProgressRecord::from_blocks(blocks);
    if let Some(stored) = db.get(&config.user_id, today)? {
        record.custom_tasks = stored.custom_tasks;
    }
    db.put(&config.user_id, today, &record)?;
    Ok(())
}

fn emit(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
