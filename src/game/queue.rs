use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::piece::Shape;

/// Hands out shapes: predefined ones first, then random palette shapes forever.
#[derive(Clone, Debug)]
pub struct ShapeQueue {
    pending: VecDeque<Shape>,
    palette: Vec<Shape>,
    rng: StdRng,
}

impl ShapeQueue {
    pub fn new(pending: impl IntoIterator<Item = Shape>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pending: pending.into_iter().collect(),
            palette: Shape::palette(),
            rng,
        }
    }

    /// Number of predefined shapes still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn next_shape(&mut self) -> Shape {
        if let Some(shape) = self.pending.pop_front() {
            return shape;
        }
        let index = self.rng.gen_range(0..self.palette.len());
        self.palette[index].clone()
    }
}
