use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::{ConfigError, GameConfig};
use crate::game::board::Board;
use crate::game::piece::Piece;
use crate::game::queue::ShapeQueue;
use crate::input::command::Command;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Everything the frame loop mutates: the board, the falling piece and the
/// drop timer.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub current_piece: Piece,
    pub game_state: GameState,
    queue: ShapeQueue,
    drop_counter: Duration,
    drop_interval: Duration,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.width, config.height);
        let mut queue = ShapeQueue::new(config.queue.iter().cloned(), config.seed);
        let current_piece = Piece::spawn(queue.next_shape(), board.width());

        let mut game = Self {
            board,
            current_piece,
            game_state: GameState::Playing,
            queue,
            drop_counter: Duration::ZERO,
            drop_interval: config.drop_interval,
        };
        game.check_spawn();
        Ok(game)
    }

    pub fn is_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }

    pub fn drop_counter(&self) -> Duration {
        self.drop_counter
    }

    /// Predefined shapes not yet spawned.
    pub fn queued_shapes(&self) -> usize {
        self.queue.pending()
    }

    /// Replaces the falling piece with the next shape, centered on row 0.
    /// A spawn that collides ends the game and wipes the board.
    pub fn spawn_piece(&mut self) {
        let shape = self.queue.next_shape();
        self.current_piece = Piece::spawn(shape, self.board.width());
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        let piece = &self.current_piece;
        if self.board.collides(piece) {
            info!(x = piece.x, y = piece.y, "spawn collided, game over");
            self.board.clear();
            self.game_state = GameState::GameOver;
        } else {
            debug!(
                x = piece.x,
                width = piece.shape.width(),
                height = piece.shape.height(),
                "spawned piece"
            );
        }
    }

    /// Shifts the piece horizontally by `dx`, undoing the shift on collision.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        self.current_piece.x += dx;
        if self.board.collides(&self.current_piece) {
            self.current_piece.x -= dx;
            return false;
        }
        true
    }

    /// Moves the piece down one row. When it cannot move, it is merged into
    /// the board where it stands and the next piece spawns. Returns whether
    /// the piece moved.
    pub fn drop_piece(&mut self) -> bool {
        self.drop_counter = Duration::ZERO;
        self.current_piece.y += 1;
        if !self.board.collides(&self.current_piece) {
            trace!(y = self.current_piece.y, "piece dropped");
            return true;
        }

        self.current_piece.y -= 1;
        self.board.merge(&self.current_piece);
        debug!(
            x = self.current_piece.x,
            y = self.current_piece.y,
            "piece landed"
        );
        self.spawn_piece();
        false
    }

    /// Rotates the piece clockwise in place, keeping the old orientation
    /// when the rotated one would collide.
    pub fn rotate_piece(&mut self) -> bool {
        let rotated = self.current_piece.rotated();
        if self.board.collides(&rotated) {
            return false;
        }
        self.current_piece = rotated;
        true
    }

    pub fn apply(&mut self, command: Command) {
        if self.is_over() {
            return;
        }
        match command {
            Command::MoveLeft | Command::MoveRight => {
                if let Some(dx) = command.dx() {
                    self.move_piece(dx);
                }
            }
            Command::SoftDrop => {
                self.drop_piece();
            }
            Command::Rotate => {
                self.rotate_piece();
            }
        }
    }

    /// Advances the drop timer, dropping the piece once the counter passes
    /// the drop interval.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.is_over() {
            return;
        }
        self.drop_counter += elapsed;
        if self.drop_counter > self.drop_interval {
            self.drop_piece();
        }
    }

    /// One frame of game logic: input first, then time.
    pub fn step(&mut self, elapsed: Duration, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
        self.tick(elapsed);
    }

    /// Every cell to paint this frame: landed cells plus the visible part of
    /// the falling piece. After a game over that is the piece that failed to
    /// spawn, drawn over the cleared board.
    pub fn drawable_cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = self.board.occupied_cells().collect();
        for (x, y) in self.current_piece.get_blocks() {
            if self.board.cell(x, y).is_some() {
                cells.push((x as usize, y as usize));
            }
        }
        cells
    }
}
