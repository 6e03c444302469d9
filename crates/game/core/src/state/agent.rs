use arrayvec::ArrayVec;

use super::{Direction, EntityId, Position};
use crate::config::GameConfig;
use crate::env::WorldOracle;

/// Pending direction tokens, bounded at [`GameConfig::INPUT_QUEUE_CAPACITY`].
pub type InputQueue = ArrayVec<Direction, { GameConfig::INPUT_QUEUE_CAPACITY }>;

/// What an agent is, for drivers and logging. Behavior is decided by the
/// controller attached to it, not by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum AgentKind {
    Player,
    Enemy,
}

/// Tile-to-tile interpolation state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementState {
    pub moving: bool,
    /// Fraction of the current step completed, in `[0, 1)`.
    pub progress: f64,
    pub from: Position,
    /// Destination tile, already wrapped into the grid.
    pub to: Position,
    /// Direction of the step in flight.
    pub direction: Option<Direction>,
}

impl MovementState {
    pub fn idle(position: Position) -> Self {
        Self {
            moving: false,
            progress: 0.0,
            from: position,
            to: position,
            direction: None,
        }
    }
}

/// A player or enemy standing on the tile grid.
///
/// The position only changes inside [`Agent::advance`]. Controllers drive an
/// agent exclusively through [`Agent::queue_input`], which keeps planning and
/// physical movement on opposite sides of a two-slot intent queue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id: EntityId,
    kind: AgentKind,
    position: Position,
    facing: Direction,
    movement: MovementState,
    input_queue: InputQueue,
    /// Seconds since the last step finished or the last input was consumed.
    input_timer: f64,
}

impl Agent {
    pub fn new(id: EntityId, kind: AgentKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            facing: Direction::Down,
            movement: MovementState::idle(position),
            input_queue: InputQueue::new(),
            input_timer: 0.0,
        }
    }

    #[must_use]
    pub fn with_facing(mut self, facing: Direction) -> Self {
        self.facing = facing;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    pub fn is_moving(&self) -> bool {
        self.movement.moving
    }

    pub fn queued_inputs(&self) -> &[Direction] {
        &self.input_queue
    }

    /// Mid-step or holding a queued input. Controllers never queue while busy.
    pub fn is_busy(&self) -> bool {
        self.movement.moving || !self.input_queue.is_empty()
    }

    /// Queues a direction token. Returns `false` when the queue is full.
    pub fn queue_input(&mut self, direction: Direction) -> bool {
        match self.input_queue.try_push(direction) {
            Ok(()) => true,
            Err(_) => {
                tracing::trace!("agent {} dropped input {}: queue full", self.id, direction);
                false
            }
        }
    }

    /// Places the agent on a tile, cancelling any step in flight.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.movement = MovementState::idle(position);
    }

    /// Advances interpolation and consumes queued input.
    ///
    /// While moving, progress accumulates at `move_speed` tiles per second and
    /// the agent lands on the destination once it reaches 1. While idle, one
    /// queued input is consumed after `input_cooldown` has elapsed.
    pub fn advance<W: WorldOracle + ?Sized>(&mut self, delta_time: f64, world: &W, config: &GameConfig) {
        if self.movement.moving {
            self.movement.progress += delta_time * config.move_speed;
            if self.movement.progress >= 1.0 {
                self.position = self.movement.to;
                self.movement = MovementState::idle(self.position);
                self.input_timer = 0.0;
            }
            return;
        }

        self.input_timer += delta_time;
        if self.input_timer < config.input_cooldown {
            return;
        }
        if let Some(direction) = self.input_queue.pop_at(0) {
            self.try_move(direction, world);
        }
    }

    /// Turns toward `direction` and starts a step if the destination is walkable.
    pub fn try_move<W: WorldOracle + ?Sized>(&mut self, direction: Direction, world: &W) -> bool {
        if self.movement.moving {
            return false;
        }

        self.facing = direction;
        let destination = world.wrap(self.position.step(direction));
        if !world.is_walkable_at(destination) {
            tracing::trace!("agent {} blocked moving {} into {}", self.id, direction, destination);
            return false;
        }

        self.movement = MovementState {
            moving: true,
            progress: 0.0,
            from: self.position,
            to: destination,
            direction: Some(direction),
        };
        true
    }

    /// Eased position in tile units, for renderers.
    ///
    /// Interpolates along the step direction rather than toward the wrapped
    /// destination, so a step across the grid seam slides off the edge.
    pub fn interpolated_position(&self) -> (f64, f64) {
        let base = (f64::from(self.position.x), f64::from(self.position.y));
        let Some(direction) = self.movement.direction.filter(|_| self.movement.moving) else {
            return base;
        };
        let t = ease_in_out(self.movement.progress);
        let (dx, dy) = direction.unit_vector();
        (base.0 + dx * t, base.1 + dy * t)
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TerrainKind, TileGrid};

    fn open_grid() -> TileGrid {
        TileGrid::new(4, 4, TerrainKind::Grass).unwrap()
    }

    #[test]
    fn input_queue_holds_at_most_two() {
        let mut agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::ORIGIN);

        assert!(agent.queue_input(Direction::Up));
        assert!(agent.queue_input(Direction::Left));
        assert!(!agent.queue_input(Direction::Down));
        assert_eq!(agent.queued_inputs(), &[Direction::Up, Direction::Left]);
        assert!(agent.is_busy());
    }

    #[test]
    fn waits_for_cooldown_before_consuming_input() {
        let world = open_grid();
        let config = GameConfig::default();
        let mut agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(1, 1));
        agent.queue_input(Direction::Right);

        agent.advance(0.1, &world, &config);
        assert!(!agent.is_moving());

        agent.advance(0.1, &world, &config);
        assert!(agent.is_moving());
        assert_eq!(agent.movement().to, Position::new(2, 1));
        assert_eq!(agent.facing(), Direction::Right);
    }

    #[test]
    fn step_completes_after_one_over_speed_seconds() {
        let world = open_grid();
        let config = GameConfig::default().with_input_cooldown(0.0);
        let mut agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(1, 1));
        agent.queue_input(Direction::Down);

        agent.advance(0.0, &world, &config);
        assert!(agent.is_moving());
        assert_eq!(agent.position(), Position::new(1, 1));

        agent.advance(0.25, &world, &config);
        assert!(!agent.is_moving());
        assert_eq!(agent.position(), Position::new(1, 2));
    }

    #[test]
    fn blocked_step_only_turns() {
        let mut world = open_grid();
        world.set_tile(2, 1, TerrainKind::Tree);
        let mut agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(1, 1));

        assert!(!agent.try_move(Direction::Right, &world));
        assert_eq!(agent.facing(), Direction::Right);
        assert!(!agent.is_moving());
    }

    #[test]
    fn interpolation_eases_along_step() {
        let world = open_grid();
        let mut agent = Agent::new(EntityId(1), AgentKind::Enemy, Position::new(1, 1));
        agent.try_move(Direction::Right, &world);

        assert_eq!(agent.interpolated_position(), (1.0, 1.0));
        agent.advance(0.125, &world, &GameConfig::default());
        assert_eq!(agent.interpolated_position(), (1.5, 1.0));
    }
}
