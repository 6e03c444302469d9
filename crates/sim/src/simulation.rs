//! Fixed-step loop over controllers and agent movement.

use std::fs;

use anyhow::{Context, Result, bail};
use game_core::{AgentKind, Agents, EntityId, GameConfig, Position, TerrainKind, TileGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use runtime::{
    AiConfig, AiController, Goal, GoalOutcome, PerceptionSystem, Target, TaskScheduler,
    TickInputs,
};

use crate::config::SimConfig;

/// Share of generated tiles that become obstacles or decoration.
const OBSTACLE_DENSITY: f64 = 0.12;
const DECORATION_DENSITY: f64 = 0.08;

const OBSTACLES: [TerrainKind; 3] = [TerrainKind::Tree, TerrainKind::Water, TerrainKind::Wall];
const DECORATIONS: [TerrainKind; 4] = [
    TerrainKind::Dirt,
    TerrainKind::Stone,
    TerrainKind::Flower,
    TerrainKind::Sand,
];

/// Totals gathered over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimReport {
    pub ticks: u64,
    pub decisions: u64,
    /// Tile-to-tile steps completed by all agents.
    pub steps: u64,
    pub goals_completed: u32,
    pub goals_unreachable: u32,
}

/// A controller and the goal bookkeeping the driver keeps for it.
struct Driven {
    controller: AiController,
    had_goal: bool,
}

/// World, agents and controllers advanced together one fixed step at a time.
pub struct Simulation {
    world: TileGrid,
    agents: Agents,
    driven: Vec<Driven>,
    scheduler: TaskScheduler,
    perception: PerceptionSystem,
    ai: AiConfig,
    movement: GameConfig,
    delta_time: f64,
    report: SimReport,
}

impl Simulation {
    /// Builds the world and spawns every agent from `config`.
    ///
    /// Each enemy starts with a goal to walk to a random tile; once that goal
    /// ends it falls back to fleeing and wandering.
    pub fn build(config: &SimConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = match &config.map {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("failed to read map {}", path.display()))?;
                TileGrid::from_ascii(&source)
                    .with_context(|| format!("invalid map {}", path.display()))?
            }
            None => generate_world(config.width, config.height, &mut rng)?,
        };
        let dimensions = world.dimensions();
        tracing::info!("World ready: {}x{}", dimensions.width, dimensions.height);

        let mut agents = Agents::new();
        let mut scheduler = TaskScheduler::new();
        let mut driven = Vec::with_capacity(config.enemies + 1);

        let player = agents.spawn_player(world.random_walkable_position(&mut rng));
        let mut assist = AiController::player_assist(player, config.ai.clone())
            .with_seed(config.seed);
        if config.autopilot {
            assist.toggle(Some(true));
        }
        driven.push(Driven {
            controller: assist,
            had_goal: false,
        });

        for _ in 0..config.enemies {
            let id = agents.spawn(AgentKind::Enemy, world.random_walkable_position(&mut rng));
            let mut controller = AiController::enemy(id, config.ai.clone())
                .with_seed(config.seed ^ u64::from(id.0));
            let destination = world.random_walkable_position(&mut rng);
            controller.assign_goal(Goal::move_to(destination), &mut scheduler);
            driven.push(Driven {
                controller,
                had_goal: true,
            });
        }

        Ok(Self {
            world,
            agents,
            driven,
            scheduler,
            perception: PerceptionSystem::standard(&config.ai),
            ai: config.ai.clone(),
            movement: GameConfig::default(),
            delta_time: config.delta_time,
            report: SimReport::default(),
        })
    }

    /// Simulation on a prepared world with only the player placed, its
    /// auto-pilot off. Enemies are added with [`Simulation::spawn_enemy`].
    pub fn with_world(world: TileGrid, player_at: Position, ai: AiConfig, delta_time: f64) -> Self {
        let mut agents = Agents::new();
        let player = agents.spawn_player(player_at);

        Self {
            perception: PerceptionSystem::standard(&ai),
            driven: vec![Driven {
                controller: AiController::player_assist(player, ai.clone()),
                had_goal: false,
            }],
            world,
            agents,
            scheduler: TaskScheduler::new(),
            ai,
            movement: GameConfig::default(),
            delta_time,
            report: SimReport::default(),
        }
    }

    pub fn world(&self) -> &TileGrid {
        &self.world
    }

    pub fn agents(&self) -> &Agents {
        &self.agents
    }

    pub fn report(&self) -> &SimReport {
        &self.report
    }

    pub fn controller(&self, id: EntityId) -> Option<&AiController> {
        self.driven
            .iter()
            .map(|driven| &driven.controller)
            .find(|controller| controller.entity() == id)
    }

    pub fn controller_mut(&mut self, id: EntityId) -> Option<&mut AiController> {
        self.driven
            .iter_mut()
            .map(|driven| &mut driven.controller)
            .find(|controller| controller.entity() == id)
    }

    /// Adds an enemy with a stock controller at `position`.
    pub fn spawn_enemy(&mut self, position: Position) -> EntityId {
        let id = self.agents.spawn(AgentKind::Enemy, position);
        self.driven.push(Driven {
            controller: AiController::enemy(id, self.ai.clone()),
            had_goal: false,
        });
        id
    }

    /// Gives `id` a walk-to goal. Returns `false` for unknown agents.
    pub fn assign_goal(&mut self, id: EntityId, target: Position) -> bool {
        let Some(driven) = self.driven.iter_mut().find(|d| d.controller.entity() == id) else {
            return false;
        };
        driven.controller.assign_goal(Goal::move_to(target), &mut self.scheduler);
        driven.had_goal = true;
        true
    }

    /// Runs `ticks` fixed steps and returns the running totals.
    pub fn run(&mut self, ticks: u64) -> SimReport {
        for _ in 0..ticks {
            self.step();
        }
        self.report.clone()
    }

    /// One fixed step: every controller decides, then every agent moves.
    pub fn step(&mut self) {
        let dt = self.delta_time;
        let player = self.agents.player().map(Target::from);
        let quarry = player.and_then(|player| nearest_enemy(&self.agents, player.position));

        for driven in &mut self.driven {
            let id = driven.controller.entity();
            let Some(agent) = self.agents.get_mut(id) else {
                continue;
            };

            let mut inputs = TickInputs::new(&mut self.scheduler).with_perception(&self.perception);
            if id.is_player() {
                inputs.target = quarry;
            } else {
                inputs.player = player;
            }

            if driven.controller.update(dt, agent, &self.world, inputs).is_some() {
                self.report.decisions += 1;
            }

            if driven.had_goal && driven.controller.goal().is_none() {
                driven.had_goal = false;
                match driven.controller.last_outcome() {
                    Some(GoalOutcome::Completed) => {
                        self.report.goals_completed += 1;
                        tracing::info!("Agent {} reached its goal at {}", id, agent.position());
                    }
                    Some(GoalOutcome::Unreachable) => {
                        self.report.goals_unreachable += 1;
                        tracing::info!("Agent {} gave up: goal unreachable", id);
                    }
                    Some(GoalOutcome::Aborted) | None => {}
                }
            }
        }

        for agent in self.agents.iter_mut() {
            let before = agent.position();
            agent.advance(dt, &self.world, &self.movement);
            if agent.position() != before {
                self.report.steps += 1;
                tracing::trace!("Agent {} moved {} -> {}", agent.id(), before, agent.position());
            }
        }

        self.report.ticks += 1;
    }

    /// ASCII map with agents drawn on top: `@` for the player, `E` for enemies.
    pub fn render(&self) -> String {
        let width = self.world.dimensions().width as usize;
        let mut rows: Vec<Vec<char>> = self
            .world
            .to_ascii()
            .lines()
            .map(|line| line.chars().collect())
            .collect();

        for agent in self.agents.iter() {
            let tile = agent.position();
            let glyph = match agent.kind() {
                AgentKind::Player => '@',
                AgentKind::Enemy => 'E',
            };
            if let Some(cell) = rows
                .get_mut(tile.y as usize)
                .and_then(|row| row.get_mut(tile.x as usize))
            {
                *cell = glyph;
            }
        }

        let mut out = String::with_capacity(rows.len() * (width + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Open field with scattered obstacles and decoration.
fn generate_world(width: u32, height: u32, rng: &mut ChaCha8Rng) -> Result<TileGrid> {
    if width < 3 || height < 3 {
        bail!("generated maps need at least 3x3 tiles, got {}x{}", width, height);
    }

    let mut world = TileGrid::new(width, height, TerrainKind::Grass)?;
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let roll: f64 = rng.gen_range(0.0..1.0);
            if roll < OBSTACLE_DENSITY {
                world.set_tile(x, y, OBSTACLES[rng.gen_range(0..OBSTACLES.len())]);
            } else if roll < OBSTACLE_DENSITY + DECORATION_DENSITY {
                world.set_tile(x, y, DECORATIONS[rng.gen_range(0..DECORATIONS.len())]);
            }
        }
    }
    Ok(world)
}

/// Closest enemy to `from` by Manhattan distance, lowest id on ties.
fn nearest_enemy(agents: &Agents, from: Position) -> Option<Target> {
    agents
        .iter()
        .filter(|agent| agent.kind() == AgentKind::Enemy)
        .min_by_key(|agent| agent.position().manhattan_distance(from))
        .map(Target::from)
}
