//! Progress hydration.
//!
//! Generation always produces fresh Pending blocks; previously persisted
//! per-day state is overlaid afterwards by block id. The overlay and the
//! storage seam live here so the generator stays storage-free.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::{BlockStatus, TimeBlock};
use crate::error::Result;

/// Persisted per-day progress for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Block ids completed today.
    #[serde(default)]
    pub completed: Vec<String>,
    /// Block ids failed today (manually or by the sweep).
    #[serde(default)]
    pub failed: Vec<String>,
    /// User-edited task lists, replacing the sampled suggestions.
    #[serde(default)]
    pub custom_tasks: HashMap<String, Vec<String>>,
}

impl ProgressRecord {
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.failed.is_empty() && self.custom_tasks.is_empty()
    }

    pub fn mark_completed(&mut self, block_id: impl Into<String>) {
        let id = block_id.into();
        if !self.completed.contains(&id) {
            self.completed.push(id);
        }
    }

    pub fn mark_failed(&mut self, block_id: impl Into<String>) {
        let id = block_id.into();
        if !self.failed.contains(&id) {
            self.failed.push(id);
        }
    }

    pub fn set_custom_tasks(&mut self, block_id: impl Into<String>, tasks: Vec<String>) {
        self.custom_tasks.insert(block_id.into(), tasks);
    }

    /// Capture the current state of a block list for persistence.
    pub fn from_blocks(blocks: &[TimeBlock]) -> Self {
        let mut record = Self::default();
        for block in blocks {
            match block.status {
                BlockStatus::Completed => record.completed.push(block.id.clone()),
                BlockStatus::Failed => record.failed.push(block.id.clone()),
                BlockStatus::Pending => {}
            }
        }
        record
    }
}

/// Storage seam for per-day progress, keyed by user and calendar date.
///
/// The concrete implementation lives in the storage module; tests and
/// embedders can supply their own.
pub trait ProgressStore {
    fn get(&self, user_id: &str, date: NaiveDate) -> Result<Option<ProgressRecord>>;
    fn put(&self, user_id: &str, date: NaiveDate, record: &ProgressRecord) -> Result<()>;
}

/// Overlay a stored record onto freshly generated blocks, matching by id.
///
/// Status is only applied to blocks still Pending; custom task lists
/// replace the sampled suggestions wholesale. Ids with no matching block
/// (a window change removed them) are ignored.
pub fn apply(blocks: &mut [TimeBlock], record: &ProgressRecord) {
    for block in blocks.iter_mut() {
        if record.completed.iter().any(|id| id == &block.id) {
            let _ = block.complete();
        } else if record.failed.iter().any(|id| id == &block.id) {
            let _ = block.fail();
        }
        if let Some(tasks) = record.custom_tasks.get(&block.id) {
            block.suggested_tasks = tasks.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockCategory;

    fn block(id: &str) -> TimeBlock {
        TimeBlock {
            id: id.to_string(),
            title: id.to_string(),
            category: BlockCategory::DeepWork,
            start_time: "09:00".parse().unwrap(),
            end_time: "10:00".parse().unwrap(),
            description: String::new(),
            suggested_tasks: vec!["sampled".to_string()],
            status: BlockStatus::Pending,
            actionable_tip: None,
        }
    }

    #[test]
    fn overlay_applies_status_and_custom_tasks() {
        let mut blocks = vec![block("block-warmup"), block("block-deep"), block("block-admin")];
        let mut record = ProgressRecord::default();
        record.mark_completed("block-warmup");
        record.mark_failed("block-deep");
        record.set_custom_tasks("block-admin", vec!["invoice ACME".to_string()]);

        apply(&mut blocks, &record);

        assert_eq!(blocks[0].status, BlockStatus::Completed);
        assert_eq!(blocks[1].status, BlockStatus::Failed);
        assert_eq!(blocks[2].status, BlockStatus::Pending);
        assert_eq!(blocks[2].suggested_tasks, vec!["invoice ACME".to_string()]);
    }

    #[test]
    fn overlay_ignores_unknown_ids() {
        let mut blocks = vec![block("block-warmup")];
        let mut record = ProgressRecord::default();
        record.mark_completed("block-prospect");
        apply(&mut blocks, &record);
        assert_eq!(blocks[0].status, BlockStatus::Pending);
    }

    #[test]
    fn round_trip_through_from_blocks() {
        let mut blocks = vec![block("block-warmup"), block("block-deep")];
        blocks[0].complete().unwrap();
        blocks[1].fail().unwrap();

        let record = ProgressRecord::from_blocks(&blocks);
        assert_eq!(record.completed, vec!["block-warmup".to_string()]);
        assert_eq!(record.failed, vec!["block-deep".to_string()]);

        let mut fresh = vec![block("block-warmup"), block("block-deep")];
        apply(&mut fresh, &record);
        assert_eq!(fresh[0].status, BlockStatus::Completed);
        assert_eq!(fresh[1].status, BlockStatus::Failed);
    }

    #[test]
    fn marks_are_idempotent() {
        let mut record = ProgressRecord::default();
        record.mark_completed("block-warmup");
        record.mark_completed("block-warmup");
        assert_eq!(record.completed.len(), 1);
    }
}
