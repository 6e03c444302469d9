//! Controllers that turn perception and plans into movement intents.

pub mod ai;
