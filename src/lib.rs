//! A minimal falling-block puzzle game for the terminal.
//!
//! The game logic in [`game`] is independent of any terminal: drive it with
//! [`Game::step`] and read back [`Game::drawable_cells`]. The [`ui`] module
//! paints a [`Game`] into a ratatui frame.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameState};
pub use input::Command;
