//! Tunables for agent controllers and their default senses.

use std::f64::consts::FRAC_PI_3;

/// What the goal leaf does when the next waypoint stays blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StallPolicy {
    /// Keep retrying the blocked step on every decision.
    #[default]
    Wait,
    /// Drop the queued plan and plan again from the current tile after
    /// `after` consecutive decisions in which the agent was idle but the
    /// next step could not execute.
    Replan { after: u32 },
}

/// Controller configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiConfig {
    /// Seconds between behavior tree evaluations.
    pub decision_interval: f64,
    /// Vision range in tiles.
    pub vision_range: f64,
    /// Vision half-angle in radians.
    pub vision_angle: f64,
    /// Smell radius in tiles.
    pub smell_range: f64,
    pub stall_policy: StallPolicy,
}

impl AiConfig {
    pub const DEFAULT_DECISION_INTERVAL: f64 = 0.3;
    pub const DEFAULT_VISION_RANGE: f64 = 6.0;
    pub const DEFAULT_VISION_ANGLE: f64 = FRAC_PI_3;
    pub const DEFAULT_SMELL_RANGE: f64 = 3.0;

    pub fn new() -> Self {
        Self {
            decision_interval: Self::DEFAULT_DECISION_INTERVAL,
            vision_range: Self::DEFAULT_VISION_RANGE,
            vision_angle: Self::DEFAULT_VISION_ANGLE,
            smell_range: Self::DEFAULT_SMELL_RANGE,
            stall_policy: StallPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_decision_interval(mut self, seconds: f64) -> Self {
        self.decision_interval = seconds;
        self
    }

    #[must_use]
    pub fn with_vision(mut self, range: f64, half_angle: f64) -> Self {
        self.vision_range = range;
        self.vision_angle = half_angle;
        self
    }

    #[must_use]
    pub fn with_smell_range(mut self, range: f64) -> Self {
        self.smell_range = range;
        self
    }

    #[must_use]
    pub fn with_stall_policy(mut self, policy: StallPolicy) -> Self {
        self.stall_policy = policy;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}
