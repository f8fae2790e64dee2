//! Professional roles and their built-in content pools.
//!
//! Each role carries three static content pools used to personalize
//! generated blocks: deep-work task candidates, trend-research task
//! candidates, and a single prospecting tip. Multi-role users get the
//! union of their roles' pools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A professional specialization held by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    GraphicDesigner,
    MotionDesigner,
    VideoEditor,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 3] = [
        Role::GraphicDesigner,
        Role::MotionDesigner,
        Role::VideoEditor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::GraphicDesigner => "Graphic Designer",
            Role::MotionDesigner => "Motion Designer",
            Role::VideoEditor => "Video Editor",
        }
    }

    /// Deep-work task candidates for this role.
    pub fn deep_work_pool(&self) -> &'static [&'static str] {
        match self {
            Role::GraphicDesigner => &[
                "Design 3 carousel concepts for a niche you want to attract",
                "Rebuild your strongest project into a portfolio case study",
                "Produce a one-page brand identity mockup for a fictional client",
                "Batch a set of reusable social media templates",
            ],
            Role::MotionDesigner => &[
                "Animate a 15-second logo reveal for your showreel",
                "Recreate a motion trend frame-by-frame to learn its timing",
                "Cut a 30-second showreel update with your latest work",
                "Build a reusable lower-thirds pack",
            ],
            Role::VideoEditor => &[
                "Edit a before/after comparison of a raw vs. finished cut",
                "Assemble a 45-second vertical edit from stock footage",
                "Refine the pacing of your best recent delivery",
                "Create a captioned teaser from a long-form video",
            ],
        }
    }

    /// Trend-research task candidates for this role.
    pub fn trend_pool(&self) -> &'static [&'static str] {
        match self {
            Role::GraphicDesigner => &[
                "Scan Behance's featured gallery and save 5 references",
                "Collect 3 type pairings trending in your niche this week",
                "Review the latest rebrand case studies on your feed",
            ],
            Role::MotionDesigner => &[
                "Watch 3 motion pieces from this week's featured reels",
                "Break down one trending transition and note how it works",
                "Save 5 kinetic typography references",
            ],
            Role::VideoEditor => &[
                "Study the hooks of 5 top-performing short videos today",
                "Note the cut rhythm of one viral edit in your niche",
                "Collect 3 sound-design references from trending posts",
            ],
        }
    }

    /// The single prospecting tip associated with this role.
    pub fn prospecting_tip(&self) -> &'static str {
        match self {
            Role::GraphicDesigner => {
                "Send your portfolio to 3 agencies that posted design openings this week"
            }
            Role::MotionDesigner => {
                "Offer a motion upgrade to 3 brands still using static ads"
            }
            Role::VideoEditor => {
                "Message 3 creators who post weekly but clearly edit their own videos"
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::GraphicDesigner => "graphic-designer",
            Role::MotionDesigner => "motion-designer",
            Role::VideoEditor => "video-editor",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graphic-designer" => Ok(Role::GraphicDesigner),
            "motion-designer" => Ok(Role::MotionDesigner),
            "video-editor" => Ok(Role::VideoEditor),
            _ => Err(ValidationError::InvalidValue {
                field: "role".to_string(),
                message: format!("unknown role '{s}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_content() {
        for role in Role::ALL {
            assert!(!role.deep_work_pool().is_empty());
            assert!(!role.trend_pool().is_empty());
            assert!(!role.prospecting_tip().is_empty());
        }
    }

    #[test]
    fn display_parse_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::GraphicDesigner).unwrap();
        assert_eq!(json, "\"graphic-designer\"");
    }
}
