//! Time block data model.
//!
//! A block is a contiguous, typed segment of the work day with its own
//! task suggestions and completion status. The presentation layer indexes
//! blocks by category for icons and colors, so those lookup tables are
//! part of the public contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::ValidationError;

/// Whether the user's typical clients are businesses or end consumers.
///
/// Drives the ordering of the Prospecting and DeepWork blocks: businesses
/// answer outreach during office hours, consumers in the evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSegment {
    Enterprise,
    Consumer,
}

impl fmt::Display for BusinessSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessSegment::Enterprise => write!(f, "enterprise"),
            BusinessSegment::Consumer => write!(f, "consumer"),
        }
    }
}

impl std::str::FromStr for BusinessSegment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enterprise" => Ok(BusinessSegment::Enterprise),
            "consumer" => Ok(BusinessSegment::Consumer),
            _ => Err(ValidationError::InvalidValue {
                field: "segment".to_string(),
                message: format!("unknown segment '{s}' (expected enterprise or consumer)"),
            }),
        }
    }
}

/// Category of a generated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    TrendHunting,
    Prospecting,
    DeepWork,
    Admin,
    Rest,
}

impl BlockCategory {
    /// Icon name the presentation layer maps to a glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            BlockCategory::TrendHunting => "radar",
            BlockCategory::Prospecting => "send",
            BlockCategory::DeepWork => "brain",
            BlockCategory::Admin => "clipboard-list",
            BlockCategory::Rest => "coffee",
        }
    }

    /// Accent color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            BlockCategory::TrendHunting => "#8b5cf6",
            BlockCategory::Prospecting => "#f59e0b",
            BlockCategory::DeepWork => "#3b82f6",
            BlockCategory::Admin => "#64748b",
            BlockCategory::Rest => "#22c55e",
        }
    }
}

/// Completion status of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Pending,
    Completed,
    Failed,
}

impl BlockStatus {
    /// Completed and Failed are terminal for the day.
    pub fn can_transition_to(&self, next: BlockStatus) -> bool {
        matches!(
            (self, next),
            (BlockStatus::Pending, BlockStatus::Completed)
                | (BlockStatus::Pending, BlockStatus::Failed)
        )
    }
}

/// Error returned for an illegal block status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTransitionError {
    pub from: BlockStatus,
    pub to: BlockStatus,
}

impl fmt::Display for BlockTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid block transition: {:?} → {:?}",
            self.from, self.to
        )
    }
}

impl std::error::Error for BlockTransitionError {}

/// A generated segment of the work day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Stable id, fixed per block kind so external progress can be
    /// re-applied across regenerations.
    pub id: String,
    pub title: String,
    pub category: BlockCategory,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub description: String,
    pub suggested_tasks: Vec<String>,
    pub status: BlockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable_tip: Option<String>,
}

impl TimeBlock {
    pub fn duration_minutes(&self) -> i32 {
        self.start_time.minutes_until(self.end_time)
    }

    pub fn is_pending(&self) -> bool {
        self.status == BlockStatus::Pending
    }

    fn transition_to(&mut self, next: BlockStatus) -> Result<(), BlockTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(BlockTransitionError {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Mark the block done. Only legal from Pending.
    pub fn complete(&mut self) -> Result<(), BlockTransitionError> {
        self.transition_to(BlockStatus::Completed)
    }

    /// Mark the block failed, either by the user or the overdue sweep.
    /// Only legal from Pending.
    pub fn fail(&mut self) -> Result<(), BlockTransitionError> {
        self.transition_to(BlockStatus::Failed)
    }

    /// Append a user-supplied task. Post-generation edits are not capped.
    pub fn push_task(&mut self, task: impl Into<String>) {
        self.suggested_tasks.push(task.into());
    }

    /// Remove a task by index, returning it.
    pub fn remove_task(&mut self, index: usize) -> Result<String, ValidationError> {
        if index >= self.suggested_tasks.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "suggested_tasks".to_string(),
                index,
                len: self.suggested_tasks.len(),
            });
        }
        Ok(self.suggested_tasks.remove(index))
    }
}
