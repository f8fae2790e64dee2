//! Automatic block failure sweep.
//!
//! The host runs this roughly once per minute (plus once shortly after
//! load) against the current wall clock. A block still Pending more than
//! one minute past its end time flips to Failed; the grace interval keeps
//! check-interval jitter at a boundary from producing false positives.
//! Completed blocks are never touched, so manual completion always
//! preempts the sweep.

use chrono::{Duration, NaiveTime};

use crate::block::TimeBlock;
use crate::clock::ClockTime;

/// Grace past a block's end time before the sweep may fail it.
pub const AUTO_FAIL_GRACE_SECS: i64 = 60;

/// Flip overdue Pending blocks to Failed, returning the ids flipped.
///
/// `now` is supplied by the caller; the sweep itself never reads a clock.
/// Outside `[work_start, work_end + grace]` the sweep is a no-op, so a
/// previous day's schedule can never be failed retroactively. A block
/// ending exactly at `work_end` shares its fail deadline with the end of
/// that window, so the closing block can only be failed manually.
pub fn auto_fail_overdue(
    blocks: &mut [TimeBlock],
    now: NaiveTime,
    work_start: ClockTime,
    work_end: ClockTime,
) -> Vec<String> {
    let grace = Duration::seconds(AUTO_FAIL_GRACE_SECS);
    let window_start = work_start.to_naive();
    let window_end = work_end.to_naive() + grace;
    if now < window_start || now > window_end {
        return Vec::new();
    }

    let mut failed = Vec::new();
    for block in blocks.iter_mut() {
        if !block.is_pending() {
            continue;
        }
        let deadline = block.end_time.to_naive() + grace;
        if now > deadline && block.fail().is_ok() {
            failed.push(block.id.clone());
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockCategory, BlockStatus};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn block(id: &str, start: &str, end: &str) -> TimeBlock {
        TimeBlock {
            id: id.to_string(),
            title: id.to_string(),
            category: BlockCategory::DeepWork,
            start_time: t(start),
            end_time: t(end),
            description: String::new(),
            suggested_tasks: Vec::new(),
            status: BlockStatus::Pending,
            actionable_tip: None,
        }
    }

    #[test]
    fn within_grace_is_not_failed() {
        let mut blocks = vec![block("block-warmup", "09:00", "10:00")];
        let failed = auto_fail_overdue(&mut blocks, at(10, 0, 30), t("09:00"), t("18:00"));
        assert!(failed.is_empty());
        assert_eq!(blocks[0].status, BlockStatus::Pending);
    }

    #[test]
    fn past_grace_is_failed() {
        let mut blocks = vec![block("block-warmup", "09:00", "10:00")];
        let failed = auto_fail_overdue(&mut blocks, at(10, 1, 30), t("09:00"), t("18:00"));
        assert_eq!(failed, vec!["block-warmup".to_string()]);
        assert_eq!(blocks[0].status, BlockStatus::Failed);
    }

    #[test]
    fn completed_block_is_never_flipped() {
        let mut blocks = vec![block("block-warmup", "09:00", "10:00")];
        blocks[0].complete().unwrap();
        let failed = auto_fail_overdue(&mut blocks, at(12, 0, 0), t("09:00"), t("18:00"));
        assert!(failed.is_empty());
        assert_eq!(blocks[0].status, BlockStatus::Completed);
    }

    #[test]
    fn sweep_outside_work_window_is_noop() {
        let mut blocks = vec![block("block-warmup", "09:00", "10:00")];
        // Early morning before the window: yesterday's blocks stay pending.
        let failed = auto_fail_overdue(&mut blocks, at(7, 0, 0), t("09:00"), t("18:00"));
        assert!(failed.is_empty());
        // Well past the end of the day: also out of scope.
        let failed = auto_fail_overdue(&mut blocks, at(20, 0, 0), t("09:00"), t("18:00"));
        assert!(failed.is_empty());
        assert_eq!(blocks[0].status, BlockStatus::Pending);
    }

    #[test]
    fn closing_block_is_only_failed_manually() {
        let mut blocks = vec![block("block-admin", "17:15", "18:00")];
        // Its deadline coincides with the end of the sweep window, so no
        // check time can auto-fail it.
        for now in [at(18, 0, 59), at(18, 1, 0), at(18, 30, 0)] {
            let failed = auto_fail_overdue(&mut blocks, now, t("09:00"), t("18:00"));
            assert!(failed.is_empty());
        }
        assert_eq!(blocks[0].status, BlockStatus::Pending);

        blocks[0].fail().unwrap();
        assert_eq!(blocks[0].status, BlockStatus::Failed);
    }

    #[test]
    fn only_overdue_blocks_are_flipped() {
        let mut blocks = vec![
            block("block-warmup", "09:00", "09:45"),
            block("block-prospect", "09:45", "13:00"),
            block("block-rest", "13:00", "14:00"),
        ];
        let failed = auto_fail_overdue(&mut blocks, at(13, 10, 0), t("09:00"), t("18:00"));
        assert_eq!(
            failed,
            vec!["block-warmup".to_string(), "block-prospect".to_string()]
        );
        assert_eq!(blocks[2].status, BlockStatus::Pending);
    }
}
