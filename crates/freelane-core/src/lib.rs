//! # Freelane Core Library
//!
//! This library provides the core business logic for Freelane, a daily
//! planner for freelancers. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI is a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Schedule Generator**: Partitions a work window into typed blocks,
//!   ordered by business segment, with role-personalized task sampling
//! - **Block Lifecycle**: Pending blocks auto-fail once the wall clock
//!   passes their end time; manual completion always preempts the sweep
//! - **Hydration**: Persisted per-day progress is overlaid onto freshly
//!   generated blocks by their stable ids
//! - **Storage**: SQLite-based progress storage and TOML-based profile
//!   configuration
//!
//! ## Key Components
//!
//! - [`ScheduleGenerator`]: The window-partitioning algorithm
//! - [`TimeBlock`]: A generated segment of the work day
//! - [`ProgressStore`]: Seam for per-day progress persistence
//! - [`ProfileConfig`]: User profile (segment, roles, work window)

pub mod block;
pub mod clock;
pub mod error;
pub mod events;
pub mod generator;
pub mod hydrate;
pub mod role;
pub mod storage;
pub mod tasks;
pub mod tracker;

pub use block::{
    BlockCategory, BlockStatus, BlockTransitionError, BusinessSegment, TimeBlock,
};
pub use clock::ClockTime;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use generator::{GeneratorConfig, ScheduleGenerator};
pub use hydrate::{ProgressRecord, ProgressStore};
pub use role::Role;
pub use storage::{ProfileConfig, ProgressDb};
pub use tasks::{select_prospecting_tip, select_tasks, SuggestionPool, MAX_SUGGESTED_TASKS};
pub use tracker::{auto_fail_overdue, AUTO_FAIL_GRACE_SECS};
