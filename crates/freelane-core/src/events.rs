use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::BusinessSegment;

/// Lifecycle events emitted by the CLI flows. Hosts embedding the core
/// can subscribe to these instead of diffing block lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ScheduleGenerated {
        segment: BusinessSegment,
        block_count: usize,
        at: DateTime<Utc>,
    },
    BlockCompleted {
        block_id: String,
        at: DateTime<Utc>,
    },
    BlockFailed {
        block_id: String,
        /// True when the overdue sweep flipped the block, false for a
        /// manual "couldn't do it" action.
        auto: bool,
        at: DateTime<Utc>,
    },
}
