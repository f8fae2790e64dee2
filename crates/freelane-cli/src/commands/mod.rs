pub mod block;
pub mod config;
pub mod schedule;

use std::collections::BTreeSet;

use freelane_core::hydrate::{self, ProgressStore};
use freelane_core::{
    BusinessSegment, ClockTime, ProfileConfig, ProgressDb, Role, ScheduleGenerator, TimeBlock,
};

/// Generate today's blocks from the profile and overlay stored progress.
pub fn todays_blocks(
    config: &ProfileConfig,
    db: &ProgressDb,
) -> Result<Vec<TimeBlock>, Box<dyn std::error::Error>> {
    let mut blocks = generate_from_profile(
        config.segment,
        &config.roles,
        config.work_start,
        config.work_end,
    )?;

    let today = chrono::Local::now().date_naive();
    if let Some(record) = db.get(&config.user_id, today)? {
        hydrate::apply(&mut blocks, &record);
    }
    Ok(blocks)
}

/// Generate a fresh block list with production randomness.
pub fn generate_from_profile(
    segment: BusinessSegment,
    roles: &BTreeSet<Role>,
    work_start: ClockTime,
    work_end: ClockTime,
) -> Result<Vec<TimeBlock>, Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let blocks =
        ScheduleGenerator::new().generate(segment, roles, work_start, work_end, &mut rng)?;
    Ok(blocks)
}

/// One-line rendering of a block for terminal output.
pub fn format_block_line(block: &TimeBlock) -> String {
    let glyph = match block.status {
        freelane_core::BlockStatus::Pending => "·",
        freelane_core::BlockStatus::Completed => "✓",
        freelane_core::BlockStatus::Failed => "✗",
    };
    format!(
        "{} {}–{}  {:<20} [{}]",
        glyph, block.start_time, block.end_time, block.title, block.id
    )
}
