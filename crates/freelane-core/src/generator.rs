//! Daily schedule generation.
//!
//! Partitions a work window into an ordered sequence of typed blocks:
//! a fixed warm-up, segment-ordered prospecting and deep-work blocks
//! around a rest break, and a closing admin block pinned to the end of
//! the window. Block structure (ids, categories, boundaries) is fully
//! deterministic for a given input; only the sampled task content varies.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::block::{BlockCategory, BlockStatus, BusinessSegment, TimeBlock};
use crate::clock::ClockTime;
use crate::error::ValidationError;
use crate::role::Role;
use crate::tasks::{select_prospecting_tip, select_tasks, SuggestionPool};

pub const WARMUP_BLOCK_ID: &str = "block-warmup";
pub const PROSPECT_BLOCK_ID: &str = "block-prospect";
pub const REST_BLOCK_ID: &str = "block-rest";
pub const DEEP_BLOCK_ID: &str = "block-deep";
pub const ADMIN_BLOCK_ID: &str = "block-admin";
pub const EMERGENCY_BLOCK_ID: &str = "block-emergency";

/// Fixed durations used to partition the work window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Warm-up trend-hunting block duration (minutes)
    pub warmup_minutes: i32,
    /// Closing admin block duration (minutes)
    pub admin_minutes: i32,
    /// Rest break duration (minutes)
    pub rest_minutes: i32,
    /// Windows shorter than this collapse to a single emergency block
    pub min_window_minutes: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            warmup_minutes: 45,
            admin_minutes: 45,
            rest_minutes: 60,
            min_window_minutes: 120,
        }
    }
}

/// Generates the daily block sequence.
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Create a generator with the default durations.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Create with custom durations.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the ordered block sequence for one day.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] when `work_end` is not
    /// later than `work_start`.
    pub fn generate<R: Rng>(
        &self,
        segment: BusinessSegment,
        roles: &BTreeSet<Role>,
        work_start: ClockTime,
        work_end: ClockTime,
        rng: &mut R,
    ) -> Result<Vec<TimeBlock>, ValidationError> {
        let total_minutes = work_start.minutes_until(work_end);
        if total_minutes <= 0 {
            return Err(ValidationError::InvalidTimeRange {
                start: work_start,
                end: work_end,
            });
        }

        if total_minutes < self.config.min_window_minutes {
            return Ok(vec![self.emergency_block(work_start, work_end)]);
        }

        let mut cursor = work_start;

        let warmup_end = cursor.add_minutes(self.config.warmup_minutes);
        let warmup = TimeBlock {
            id: WARMUP_BLOCK_ID.to_string(),
            title: "Trend Radar".to_string(),
            category: BlockCategory::TrendHunting,
            start_time: cursor,
            end_time: warmup_end,
            description: description(BlockCategory::TrendHunting, segment).to_string(),
            suggested_tasks: select_tasks(roles, SuggestionPool::TrendHunting, rng),
            status: BlockStatus::Pending,
            actionable_tip: None,
        };
        cursor = warmup_end;

        // The closing block is pinned to the end of the window; everything
        // in between is the core.
        let admin_start_latest = work_end.add_minutes(-self.config.admin_minutes);
        let core_minutes = cursor.minutes_until(admin_start_latest);
        let work_block_minutes = (core_minutes - self.config.rest_minutes) / 2;

        // Fixed durations leave no room for real work blocks; treat the
        // window like the sub-minimum case.
        if work_block_minutes < 1 {
            return Ok(vec![self.emergency_block(work_start, work_end)]);
        }

        let prospect = |start: ClockTime, end: ClockTime, rng: &mut R| TimeBlock {
            id: PROSPECT_BLOCK_ID.to_string(),
            title: "Prospecting Sprint".to_string(),
            category: BlockCategory::Prospecting,
            start_time: start,
            end_time: end,
            description: description(BlockCategory::Prospecting, segment).to_string(),
            suggested_tasks: vec![
                "Send 10 personalized outreach messages".to_string(),
                "Follow up on every proposal older than 3 days".to_string(),
                "Update your pipeline after each reply".to_string(),
            ],
            status: BlockStatus::Pending,
            actionable_tip: Some(select_prospecting_tip(roles, rng)),
        };

        let deep = |start: ClockTime, end: ClockTime, rng: &mut R| TimeBlock {
            id: DEEP_BLOCK_ID.to_string(),
            title: "Deep Work".to_string(),
            category: BlockCategory::DeepWork,
            start_time: start,
            end_time: end,
            description: description(BlockCategory::DeepWork, segment).to_string(),
            suggested_tasks: select_tasks(roles, SuggestionPool::DeepWork, rng),
            status: BlockStatus::Pending,
            actionable_tip: Some(
                "Silence notifications and work in 50-minute sprints".to_string(),
            ),
        };

        let mut blocks = vec![warmup];

        // Enterprise clients answer during office hours, so prospecting
        // comes first; consumer outreach peaks in the evening, so deep
        // work leads and prospecting closes the core.
        let first_end = cursor.add_minutes(work_block_minutes);
        let rest_end = first_end.add_minutes(self.config.rest_minutes);
        let second_end = rest_end.add_minutes(work_block_minutes);

        match segment {
            BusinessSegment::Enterprise => {
                blocks.push(prospect(cursor, first_end, rng));
                blocks.push(self.rest_block(first_end, rest_end));
                blocks.push(deep(rest_end, second_end, rng));
            }
            BusinessSegment::Consumer => {
                blocks.push(deep(cursor, first_end, rng));
                blocks.push(self.rest_block(first_end, rest_end));
                blocks.push(prospect(rest_end, second_end, rng));
            }
        }
        cursor = second_end;

        // Spans to work_end exactly, absorbing the floor-division remainder.
        blocks.push(TimeBlock {
            id: ADMIN_BLOCK_ID.to_string(),
            title: "Wrap-up & Admin".to_string(),
            category: BlockCategory::Admin,
            start_time: cursor,
            end_time: work_end,
            description: description(BlockCategory::Admin, segment).to_string(),
            suggested_tasks: vec![
                "Log today's hours per client".to_string(),
                "Answer pending client messages".to_string(),
                "Write down tomorrow's single top priority".to_string(),
            ],
            status: BlockStatus::Pending,
            actionable_tip: None,
        });

        Ok(blocks)
    }

    fn rest_block(&self, start: ClockTime, end: ClockTime) -> TimeBlock {
        TimeBlock {
            id: REST_BLOCK_ID.to_string(),
            title: "Recharge Break".to_string(),
            category: BlockCategory::Rest,
            start_time: start,
            end_time: end,
            description: "Step away from the screen. The afternoon block needs you fresh."
                .to_string(),
            suggested_tasks: vec![
                "Eat away from your desk".to_string(),
                "Take a short walk outside".to_string(),
            ],
            status: BlockStatus::Pending,
            actionable_tip: None,
        }
    }

    fn emergency_block(&self, start: ClockTime, end: ClockTime) -> TimeBlock {
        TimeBlock {
            id: EMERGENCY_BLOCK_ID.to_string(),
            title: "Emergency Focus".to_string(),
            category: BlockCategory::DeepWork,
            start_time: start,
            end_time: end,
            description:
                "Short day. Skip the warm-up and spend the whole window on what pays."
                    .to_string(),
            suggested_tasks: vec![
                "Pick the single highest-impact deliverable".to_string(),
                "Send one follow-up that could unblock revenue".to_string(),
            ],
            status: BlockStatus::Pending,
            actionable_tip: None,
        }
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Static guidance text per category, varied by segment where ordering
/// changes the advice.
fn description(category: BlockCategory, segment: BusinessSegment) -> &'static str {
    match (category, segment) {
        (BlockCategory::TrendHunting, _) => {
            "Start the day scanning what is moving in your niche before the feed scans you."
        }
        (BlockCategory::Prospecting, BusinessSegment::Enterprise) => {
            "Business hours favor outbound contact. Reach decision makers while they are at their desks."
        }
        (BlockCategory::Prospecting, BusinessSegment::Consumer) => {
            "Consumer clients reply after their workday. Prospect late, when your audience is online."
        }
        (BlockCategory::DeepWork, BusinessSegment::Enterprise) => {
            "Afternoon focus time. Inboxes quiet down; produce the work you sold this morning."
        }
        (BlockCategory::DeepWork, BusinessSegment::Consumer) => {
            "Your clients are busy during the day. Use the quiet hours to produce."
        }
        (BlockCategory::Admin, _) => {
            "Close the loop: invoices, replies, and tomorrow's plan before you log off."
        }
        (BlockCategory::Rest, _) => "Recovery is part of the schedule, not a deviation from it.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(99)
    }

    fn generate(
        segment: BusinessSegment,
        start: &str,
        end: &str,
    ) -> Vec<TimeBlock> {
        let roles: BTreeSet<Role> = [Role::GraphicDesigner].into();
        ScheduleGenerator::new()
            .generate(segment, &roles, t(start), t(end), &mut rng())
            .unwrap()
    }

    #[test]
    fn enterprise_nine_to_six_matches_hand_calculation() {
        let blocks = generate(BusinessSegment::Enterprise, "09:00", "18:00");
        assert_eq!(blocks.len(), 5);

        // 540-minute window: warmup 45, admin 45, rest 60, work (450-60)/2 = 195.
        let expected = [
            (WARMUP_BLOCK_ID, "09:00", "09:45"),
            (PROSPECT_BLOCK_ID, "09:45", "13:00"),
            (REST_BLOCK_ID, "13:00", "14:00"),
            (DEEP_BLOCK_ID, "14:00", "17:15"),
            (ADMIN_BLOCK_ID, "17:15", "18:00"),
        ];
        for (block, (id, start, end)) in blocks.iter().zip(expected) {
            assert_eq!(block.id, id);
            assert_eq!(block.start_time, t(start));
            assert_eq!(block.end_time, t(end));
            assert_eq!(block.status, BlockStatus::Pending);
        }
    }

    #[test]
    fn consumer_segment_swaps_work_blocks() {
        let blocks = generate(BusinessSegment::Consumer, "09:00", "18:00");
        let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                WARMUP_BLOCK_ID,
                DEEP_BLOCK_ID,
                REST_BLOCK_ID,
                PROSPECT_BLOCK_ID,
                ADMIN_BLOCK_ID
            ]
        );
    }

    #[test]
    fn admin_block_absorbs_rounding_remainder() {
        // 541-minute window: (451-60)/2 = 195 (floor), admin picks up the
        // leftover minute and still ends exactly at work_end.
        let blocks = generate(BusinessSegment::Enterprise, "09:00", "18:01");
        let admin = blocks.last().unwrap();
        assert_eq!(admin.id, ADMIN_BLOCK_ID);
        assert_eq!(admin.end_time, t("18:01"));
        assert_eq!(admin.duration_minutes(), 46);

        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
        }
    }

    #[test]
    fn short_window_collapses_to_emergency_block() {
        let blocks = generate(BusinessSegment::Enterprise, "09:00", "10:30");
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.id, EMERGENCY_BLOCK_ID);
        assert_eq!(block.category, BlockCategory::DeepWork);
        assert_eq!(block.start_time, t("09:00"));
        assert_eq!(block.end_time, t("10:30"));
    }

    #[test]
    fn barely_two_hours_also_collapses() {
        // 120 minutes clears the threshold but leaves no room for positive
        // work blocks once the fixed durations are reserved.
        let blocks = generate(BusinessSegment::Consumer, "09:00", "11:00");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, EMERGENCY_BLOCK_ID);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let roles = BTreeSet::new();
        let err = ScheduleGenerator::new()
            .generate(
                BusinessSegment::Enterprise,
                &roles,
                t("18:00"),
                t("09:00"),
                &mut rng(),
            )
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimeRange { .. }));

        let err = ScheduleGenerator::new()
            .generate(
                BusinessSegment::Enterprise,
                &roles,
                t("09:00"),
                t("09:00"),
                &mut rng(),
            )
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimeRange { .. }));
    }

    #[test]
    fn structure_is_idempotent_across_regenerations() {
        let roles: BTreeSet<Role> = Role::ALL.into_iter().collect();
        let generator = ScheduleGenerator::new();
        let mut rng_a = Mcg128Xsl64::seed_from_u64(1);
        let mut rng_b = Mcg128Xsl64::seed_from_u64(2);

        let a = generator
            .generate(BusinessSegment::Consumer, &roles, t("08:00"), t("19:30"), &mut rng_a)
            .unwrap();
        let b = generator
            .generate(BusinessSegment::Consumer, &roles, t("08:00"), t("19:30"), &mut rng_b)
            .unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.category, y.category);
            assert_eq!(x.start_time, y.start_time);
            assert_eq!(x.end_time, y.end_time);
            assert_eq!(x.description, y.description);
        }
    }

    #[test]
    fn prospecting_carries_a_tip_and_deep_work_carries_tasks() {
        let blocks = generate(BusinessSegment::Enterprise, "09:00", "18:00");
        let prospect = blocks.iter().find(|b| b.id == PROSPECT_BLOCK_ID).unwrap();
        assert!(prospect.actionable_tip.is_some());

        let deep = blocks.iter().find(|b| b.id == DEEP_BLOCK_ID).unwrap();
        assert!(!deep.suggested_tasks.is_empty());
        assert!(deep.suggested_tasks.len() <= 3);
    }
}
