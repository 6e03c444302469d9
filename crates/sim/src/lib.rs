//! Headless driver for the agent decision layer.
//!
//! Builds a tile world, spawns a player and a handful of enemies, and runs
//! their controllers and movement in a fixed-step loop. Used to watch the AI
//! through its logs without any renderer attached.
pub mod config;
pub mod simulation;

pub use config::SimConfig;
pub use simulation::{SimReport, Simulation};
