//! Rainbow garden Snake: a grid-stepped snake simulation with a terminal
//! front end.
//!
//! The simulation core (`world`, `snake`, `food`, `game`) is deterministic and
//! free of terminal concerns; `renderer` and `ui` paint a [`game::GameState`]
//! onto a ratatui frame each tick.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
pub mod world;
