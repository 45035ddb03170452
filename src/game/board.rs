use crate::game::piece::Piece;

/// The arena of landed cells. 0 is empty, anything else is occupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<u8>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![0; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Cell value at `(x, y)`, or `None` off the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.cells.get(y)?.get(x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y][x] = value;
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    /// Occupied cells as `(x, y)`, row by row.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(x, _)| (x, y))
        })
    }

    /// Whether `piece` overlaps landed cells, a side wall or the floor.
    ///
    /// Cells above the top row never collide, not even with the side walls,
    /// so pieces may hang over the board while spawning or rotating.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.get_blocks().into_iter().any(|(x, y)| {
            if y < 0 {
                return false;
            }
            match self.cell(x, y) {
                Some(value) => value != 0,
                None => true,
            }
        })
    }

    /// Writes the piece's occupied cells into the board. Cells that fall
    /// outside the board are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y, value) in piece.shape.cells() {
            let bx = piece.x + x as i32;
            let by = piece.y + y as i32;
            if self.cell(bx, by).is_some() {
                self.cells[by as usize][bx as usize] = value;
            }
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(0);
        }
    }
}
