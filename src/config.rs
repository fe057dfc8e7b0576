//! Game configuration
//!
//! Small serde-backed knob set: which variant to play, how frames are
//! scheduled, and the run seed. JSON in, JSON out.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::{FrameScheduler, OnDemand, RepeatingTicker};
use crate::sim::Ruleset;

/// Frame cadence policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerKind {
    /// Fixed-period tick loop
    Repeating { period_ms: u64 },
    /// Next frame requested only while the game continues
    OnDemand,
}

impl Default for SchedulerKind {
    fn default() -> Self {
        SchedulerKind::Repeating { period_ms: 10 }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ruleset: Ruleset,
    pub scheduler: SchedulerKind,
    /// 0 means "derive a seed at startup"
    pub seed: u64,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Build the configured scheduling strategy
    pub fn scheduler(&self) -> Box<dyn FrameScheduler> {
        match self.scheduler {
            SchedulerKind::Repeating { period_ms } => {
                Box::new(RepeatingTicker::new(Duration::from_millis(period_ms)))
            }
            SchedulerKind::OnDemand => Box::new(OnDemand),
        }
    }
}
