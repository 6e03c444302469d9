//! Driver configuration read from the environment.
use std::env;
use std::path::PathBuf;

use runtime::AiConfig;

/// Simulation settings.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Fixed steps to run.
    pub ticks: u64,
    /// Seconds per step.
    pub delta_time: f64,
    pub seed: u64,
    pub enemies: usize,
    /// Start with the player auto-pilot switched on.
    pub autopilot: bool,
    /// ASCII map to load instead of generating one.
    pub map: Option<PathBuf>,
    pub ai: AiConfig,
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_WIDTH` / `SIM_HEIGHT` - Generated map size (default: 40x24)
    /// - `SIM_TICKS` - Steps to run (default: 600)
    /// - `SIM_DT` - Seconds per step (default: 0.05)
    /// - `SIM_SEED` - World and controller seed (default: 7)
    /// - `SIM_ENEMIES` - Enemies to spawn (default: 4)
    /// - `SIM_AUTOPILOT` - Player auto-pilot on at start (default: false)
    /// - `SIM_MAP` - Path to an ASCII map; overrides width and height
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("SIM_WIDTH") {
            config.width = width.max(1);
        }
        if let Some(height) = read_env::<u32>("SIM_HEIGHT") {
            config.height = height.max(1);
        }
        if let Some(ticks) = read_env("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(delta_time) = read_env::<f64>("SIM_DT").filter(|dt| dt.is_finite() && *dt > 0.0) {
            config.delta_time = delta_time;
        }
        if let Some(seed) = read_env("SIM_SEED") {
            config.seed = seed;
        }
        if let Some(enemies) = read_env("SIM_ENEMIES") {
            config.enemies = enemies;
        }
        if let Some(autopilot) = read_env("SIM_AUTOPILOT") {
            config.autopilot = autopilot;
        }
        config.map = env::var_os("SIM_MAP").map(PathBuf::from);

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 24,
            ticks: 600,
            delta_time: 0.05,
            seed: 7,
            enemies: 4,
            autopilot: false,
            map: None,
            ai: AiConfig::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
