use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no cells")]
    Empty,
    #[error("shape row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

const PALETTE: [&[&[u8]]; 5] = [
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1], &[1, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[1, 1, 1, 1]],
];

/// A rectangular grid of cell values, 0 meaning empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<u8>>,
}

impl Shape {
    /// Builds a shape, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ShapeError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(ShapeError::Ragged {
                row,
                len: r.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    fn from_static(rows: &[&[u8]]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }

    /// The five canonical shapes random spawns draw from.
    pub fn palette() -> Vec<Shape> {
        PALETTE.iter().map(|rows| Self::from_static(rows)).collect()
    }

    /// Letter-shaped piece used to spell words through the queue.
    pub fn glyph(letter: char) -> Option<Shape> {
        let rows: &[&[u8]] = match letter.to_ascii_uppercase() {
            'S' => &[&[1, 1, 1], &[1, 0, 0], &[1, 1, 1], &[0, 0, 1], &[1, 1, 1]],
            'T' => &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0]],
            'A' => &[&[0, 1, 0], &[1, 0, 1], &[1, 1, 1], &[1, 0, 1], &[1, 0, 1]],
            'C' => &[&[0, 1, 1], &[1, 0, 0], &[1, 0, 0], &[1, 0, 0], &[0, 1, 1]],
            'K' => &[&[1, 0, 1], &[1, 1, 0], &[1, 0, 0], &[1, 1, 0], &[1, 0, 1]],
            'M' => &[
                &[1, 0, 0, 1],
                &[1, 1, 1, 1],
                &[1, 0, 0, 1],
                &[1, 0, 0, 1],
                &[1, 0, 0, 1],
            ],
            'O' => &[&[0, 1, 0], &[1, 0, 1], &[1, 0, 1], &[1, 0, 1], &[0, 1, 0]],
            'X' => &[&[1, 0, 1], &[1, 0, 1], &[0, 1, 0], &[1, 0, 1], &[1, 0, 1]],
            'I' => &[&[1], &[1], &[1], &[1], &[1]],
            'E' => &[&[1, 1, 1], &[1, 0, 0], &[1, 1, 1], &[1, 0, 0], &[1, 1, 1]],
            _ => return None,
        };
        Some(Self::from_static(rows))
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Occupied cells as `(column, row, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(x, &v)| (x, y, v))
        })
    }

    /// Rotates 90° clockwise. Works for any rectangle: source cell `(x, y)`
    /// ends up at column `height - 1 - y`, row `x`.
    pub fn rotated(&self) -> Self {
        let height = self.height();
        let mut rows = vec![vec![0; height]; self.width()];

        for (y, row) in self.rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                rows[x][height - 1 - y] = value;
            }
        }

        Self { rows }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Places `shape` on row 0, horizontally centered over a board of `board_width`.
    pub fn spawn(shape: Shape, board_width: usize) -> Self {
        let x = (board_width as i32 - shape.width() as i32).div_euclid(2);
        Self::new(shape, x, 0)
    }

    pub fn rotated(&self) -> Self {
        Self::new(self.shape.rotated(), self.x, self.y)
    }

    /// Occupied cells in board coordinates.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        self.shape
            .cells()
            .map(|(x, y, _)| (self.x + x as i32, self.y + y as i32))
            .collect()
    }
}
