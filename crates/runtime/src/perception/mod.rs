//! Pluggable senses and the per-agent perception query.
//!
//! A [`Sense`] decides which of a set of candidate [`Target`]s an observer can
//! currently detect. [`PerceptionSystem`] holds named senses and runs all of
//! them for one observer, producing a fresh [`Perception`] every call. Nothing
//! is cached between queries.

mod smell;
mod vision;

pub use smell::SmellSense;
pub use vision::VisionSense;

use std::collections::BTreeMap;

use game_core::{Agent, EntityId, Position, WorldOracle};

use crate::config::AiConfig;

/// Snapshot of something a sense may detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id: EntityId,
    pub position: Position,
}

impl Target {
    pub const fn new(id: EntityId, position: Position) -> Self {
        Self { id, position }
    }
}

impl From<&Agent> for Target {
    fn from(agent: &Agent) -> Self {
        Self::new(agent.id(), agent.position())
    }
}

/// A detector with its own range and geometry rule.
///
/// Implementations must be pure: the same observer, world and targets yield
/// the same detections. The observer itself is never reported.
pub trait Sense: Send + Sync {
    fn scan(
        &self,
        observer: &Agent,
        world: &dyn WorldOracle,
        delta_time: f64,
        targets: &[Target],
    ) -> Vec<EntityId>;
}

/// Result of one perception query: sense name to detected targets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Perception {
    detections: BTreeMap<String, Vec<EntityId>>,
}

impl Perception {
    pub const VISION: &'static str = "vision";
    pub const SMELL: &'static str = "smell";

    /// Targets detected by the named sense. Empty for unknown senses.
    pub fn get(&self, sense: &str) -> &[EntityId] {
        self.detections.get(sense).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn detected_by(&self, sense: &str, target: EntityId) -> bool {
        self.get(sense).contains(&target)
    }

    /// Returns `true` if any sense detected `target`.
    pub fn detected_by_any(&self, target: EntityId) -> bool {
        self.detections.values().any(|found| found.contains(&target))
    }

    pub fn senses(&self) -> impl Iterator<Item = &str> {
        self.detections.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.detections.values().all(Vec::is_empty)
    }
}

/// Registry of named senses, queried in registration order.
#[derive(Default)]
pub struct PerceptionSystem {
    senses: Vec<(String, Box<dyn Sense>)>,
}

impl PerceptionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vision and smell configured from `config`, registered under
    /// [`Perception::VISION`] and [`Perception::SMELL`].
    pub fn standard(config: &AiConfig) -> Self {
        let mut system = Self::new();
        system.register_sense(
            Perception::VISION,
            Box::new(VisionSense::new(config.vision_range, config.vision_angle)),
        );
        system.register_sense(
            Perception::SMELL,
            Box::new(SmellSense::new(config.smell_range)),
        );
        system
    }

    /// Registers `sense` under `name`, replacing any sense already there.
    ///
    /// A blank name cannot be looked up and is rejected; the call returns
    /// `false` and the registry is unchanged.
    pub fn register_sense(&mut self, name: impl Into<String>, sense: Box<dyn Sense>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::warn!("rejected sense registration with a blank name");
            return false;
        }

        match self.senses.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = sense,
            None => self.senses.push((name, sense)),
        }
        true
    }

    pub fn has_sense(&self, name: &str) -> bool {
        self.senses.iter().any(|(existing, _)| existing == name)
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Runs every registered sense for `observer`.
    pub fn perceive(
        &self,
        observer: &Agent,
        world: &dyn WorldOracle,
        delta_time: f64,
        targets: &[Target],
    ) -> Perception {
        let detections = self
            .senses
            .iter()
            .map(|(name, sense)| {
                (
                    name.clone(),
                    sense.scan(observer, world, delta_time, targets),
                )
            })
            .collect();
        Perception { detections }
    }
}

impl std::fmt::Debug for PerceptionSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.senses.iter().map(|(name, _)| name))
            .finish()
    }
}
