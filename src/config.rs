use std::time::Duration;

use thiserror::Error;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL, MAX_BOARD_SIDE};
use crate::game::piece::Shape;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is below the {min_width}x{min_height} minimum")]
    BoardTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },
    #[error("board {width}x{height} exceeds the {max}x{max} limit")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("drop interval must be positive")]
    ZeroDropInterval,
    #[error("no block glyph for {0:?}")]
    UnknownGlyph(char),
    #[error("queued shape #{index} is {width}x{height}, board is {board_width}x{board_height}")]
    ShapeTooLarge {
        index: usize,
        width: usize,
        height: usize,
        board_width: usize,
        board_height: usize,
    },
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval: Duration,
    /// Fixed seed for the random fallback; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Shapes spawned before random ones, front first.
    pub queue: Vec<Shape>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval: DROP_INTERVAL,
            seed: None,
            queue: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Appends one glyph shape per letter of `word`. Whitespace is skipped.
    pub fn spell(mut self, word: &str) -> Result<Self, ConfigError> {
        for letter in word.chars().filter(|c| !c.is_whitespace()) {
            let shape = Shape::glyph(letter).ok_or(ConfigError::UnknownGlyph(letter))?;
            self.queue.push(shape);
        }
        Ok(self)
    }

    /// Smallest board every palette shape can spawn on, as `(width, height)`.
    pub fn min_board_size() -> (usize, usize) {
        Shape::palette().iter().fold((0, 0), |(w, h), s| {
            (w.max(s.width()), h.max(s.height()))
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_width, min_height) = Self::min_board_size();
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.width > MAX_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.drop_interval.is_zero() {
            return Err(ConfigError::ZeroDropInterval);
        }
        if let Some((index, shape)) = self
            .queue
            .iter()
            .enumerate()
            .find(|(_, s)| s.width() > self.width || s.height() > self.height)
        {
            return Err(ConfigError::ShapeTooLarge {
                index,
                width: shape.width(),
                height: shape.height(),
                board_width: self.width,
                board_height: self.height,
            });
        }
        Ok(())
    }
}
