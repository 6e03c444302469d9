use game_core::{Agent, EntityId, WorldOracle};

use super::{Sense, Target};

/// Slack on the cone test so a target exactly on the edge survives `acos`
/// rounding.
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Forward vision cone.
///
/// A target is seen when its straight-line distance is at most `range` and
/// the angle between the observer's facing and the direction to the target
/// is at most `half_angle`. Both bounds are inclusive. Distances use raw
/// coordinates, so a vision cone does not look across the grid seam. A target
/// on the observer's own tile sits at a right angle, so only cones of at
/// least `PI / 2` see it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionSense {
    pub range: f64,
    pub half_angle: f64,
}

impl VisionSense {
    pub const fn new(range: f64, half_angle: f64) -> Self {
        Self { range, half_angle }
    }

    /// Cone test for a single offset from the observer.
    pub fn sees(&self, facing: (f64, f64), dx: f64, dy: f64) -> bool {
        let distance = dx.hypot(dy);
        if distance > self.range {
            return false;
        }
        // Same tile has no direction; it reads as perpendicular to the facing.
        let norm = if distance == 0.0 { 1.0 } else { distance };
        let cos = ((facing.0 * dx + facing.1 * dy) / norm).clamp(-1.0, 1.0);
        cos.acos() <= self.half_angle + ANGLE_TOLERANCE
    }
}

impl Sense for VisionSense {
    fn scan(
        &self,
        observer: &Agent,
        _world: &dyn WorldOracle,
        _delta_time: f64,
        targets: &[Target],
    ) -> Vec<EntityId> {
        let origin = observer.position();
        let facing = observer.facing().unit_vector();

        targets
            .iter()
            .filter(|target| target.id != observer.id())
            .filter(|target| {
                let dx = f64::from(target.position.x - origin.x);
                let dy = f64::from(target.position.y - origin.y);
                self.sees(facing, dx, dy)
            })
            .map(|target| target.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    use game_core::{AgentKind, Direction, Position, TerrainKind, TileGrid};

    use super::*;

    const EPSILON: f64 = 1e-6;

    fn observer(facing: Direction) -> Agent {
        Agent::new(EntityId(1), AgentKind::Enemy, Position::new(10, 10)).with_facing(facing)
    }

    fn scan_one(sense: VisionSense, facing: Direction, at: Position) -> bool {
        let world = TileGrid::new(30, 30, TerrainKind::Grass).unwrap();
        let target = Target::new(EntityId(7), at);
        !sense.scan(&observer(facing), &world, 0.0, &[target]).is_empty()
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let ahead = Position::new(16, 10);

        assert!(scan_one(VisionSense::new(6.0, FRAC_PI_3), Direction::Right, ahead));
        assert!(!scan_one(VisionSense::new(6.0 - EPSILON, FRAC_PI_3), Direction::Right, ahead));
    }

    #[test]
    fn angle_boundary_is_inclusive() {
        let diagonal = Position::new(13, 7);

        assert!(scan_one(VisionSense::new(6.0, FRAC_PI_4), Direction::Right, diagonal));
        assert!(!scan_one(VisionSense::new(6.0, FRAC_PI_4 - EPSILON), Direction::Right, diagonal));
    }

    #[test]
    fn right_angle_cone_sees_perpendicular_targets() {
        let beside = Position::new(10, 13);

        assert!(scan_one(VisionSense::new(6.0, FRAC_PI_2), Direction::Right, beside));
        assert!(!scan_one(VisionSense::new(6.0, FRAC_PI_2 - EPSILON), Direction::Right, beside));
    }

    #[test]
    fn targets_behind_are_not_seen() {
        let behind = Position::new(10, 12);
        assert!(!scan_one(VisionSense::new(6.0, FRAC_PI_3), Direction::Up, behind));
        assert!(scan_one(VisionSense::new(6.0, FRAC_PI_3), Direction::Down, behind));
    }

    #[test]
    fn same_tile_is_seen_only_by_a_right_angle_cone() {
        let here = Position::new(10, 10);

        assert!(!scan_one(VisionSense::new(6.0, FRAC_PI_3), Direction::Down, here));
        assert!(scan_one(VisionSense::new(6.0, FRAC_PI_2), Direction::Down, here));
        assert!(!VisionSense::new(6.0, FRAC_PI_3).sees((0.0, 1.0), 0.0, 0.0));
    }

    #[test]
    fn observer_never_sees_itself() {
        let world = TileGrid::new(30, 30, TerrainKind::Grass).unwrap();
        let agent = observer(Direction::Down);
        let sense = VisionSense::new(6.0, FRAC_PI_3);

        assert!(sense.scan(&agent, &world, 0.0, &[Target::from(&agent)]).is_empty());
    }
}
