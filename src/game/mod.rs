pub mod board;
pub mod piece;
pub mod queue;
pub mod state;

pub use board::Board;
pub use piece::{Piece, Shape, ShapeError};
pub use queue::ShapeQueue;
pub use state::{Game, GameState};
