use game_core::{Agent, EntityId, WorldOracle};

use super::{Sense, Target};

/// Omnidirectional radius, independent of facing. Inclusive at `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmellSense {
    pub range: f64,
}

impl SmellSense {
    pub const fn new(range: f64) -> Self {
        Self { range }
    }
}

impl Sense for SmellSense {
    fn scan(
        &self,
        observer: &Agent,
        _world: &dyn WorldOracle,
        _delta_time: f64,
        targets: &[Target],
    ) -> Vec<EntityId> {
        let origin = observer.position();
        targets
            .iter()
            .filter(|target| target.id != observer.id())
            .filter(|target| origin.euclidean_distance(target.position) <= self.range)
            .map(|target| target.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{AgentKind, Position, TerrainKind, TileGrid};

    use super::*;

    #[test]
    fn radius_boundary_is_inclusive() {
        let world = TileGrid::new(20, 20, TerrainKind::Grass).unwrap();
        let observer = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(5, 5));
        let targets = [
            Target::new(EntityId(2), Position::new(8, 5)),
            Target::new(EntityId(3), Position::new(5, 2)),
            Target::new(EntityId(4), Position::new(8, 6)),
        ];

        let found = SmellSense::new(3.0).scan(&observer, &world, 0.0, &targets);
        assert_eq!(found, vec![EntityId(2), EntityId(3)]);

        let found = SmellSense::new(3.0 - 1e-6).scan(&observer, &world, 0.0, &targets);
        assert!(found.is_empty());
    }
}
