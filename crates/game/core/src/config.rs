/// Movement tunables shared by every agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Tiles travelled per second while interpolating between two tiles.
    pub move_speed: f64,
    /// Seconds an idle agent waits before consuming its next queued input.
    pub input_cooldown: f64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Pending direction tokens an agent may hold at once.
    pub const INPUT_QUEUE_CAPACITY: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_SPEED: f64 = 4.0;
    pub const DEFAULT_INPUT_COOLDOWN: f64 = 0.15;

    pub fn new() -> Self {
        Self {
            move_speed: Self::DEFAULT_MOVE_SPEED,
            input_cooldown: Self::DEFAULT_INPUT_COOLDOWN,
        }
    }

    #[must_use]
    pub fn with_move_speed(mut self, move_speed: f64) -> Self {
        self.move_speed = move_speed;
        self
    }

    #[must_use]
    pub fn with_input_cooldown(mut self, input_cooldown: f64) -> Self {
        self.input_cooldown = input_cooldown;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
