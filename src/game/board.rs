use std::fmt;

use super::{
    action::Direction,
    cell::{Cell, CellColor, CellType, Position},
    error::{GameError, Result},
};

/// Fixed-size grid of cells with walls along the boundary.
///
/// Cells live in a flat row-major arena for the whole game; everything else
/// (snake, food, search parents) refers to them by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    free_spots: usize,
}

impl Board {
    /// Smallest board that still has a 2x2 interior
    pub const MIN_SIDE: usize = 4;

    /// Create a board with walls on the boundary and open cells inside
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < Self::MIN_SIDE || cols < Self::MIN_SIDE {
            return Err(GameError::BoardTooSmall { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut free_spots = 0;
        for row in 0..rows {
            for col in 0..cols {
                let boundary = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
                let kind = if boundary {
                    CellType::Wall
                } else {
                    free_spots += 1;
                    CellType::Open
                };
                cells.push(Cell::new(Position::new(row, col), kind));
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            free_spots,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.cols
    }

    /// Number of interior cells on the fresh board
    pub fn free_spots(&self) -> usize {
        self.free_spots
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn is_boundary(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row == self.rows - 1 || pos.col == self.cols - 1
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Cell> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Cell at `pos`. Panics when `pos` is off the board.
    pub fn cell(&self, pos: Position) -> &Cell {
        match self.get(pos.row, pos.col) {
            Ok(cell) => cell,
            Err(err) => out_of_bounds(err),
        }
    }

    /// Mutable cell at `pos`. Panics when `pos` is off the board.
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        match self.index(pos.row, pos.col) {
            Ok(idx) => &mut self.cells[idx],
            Err(err) => out_of_bounds(err),
        }
    }

    pub fn kind(&self, pos: Position) -> CellType {
        self.cell(pos).kind()
    }

    pub fn color_at(&self, row: usize, col: usize) -> CellColor {
        self.cell(Position::new(row, col)).color()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Neighbor of an interior cell, or an error for boundary/off-board cells
    pub fn try_neighbor(&self, pos: Position, direction: Direction) -> Result<Position> {
        self.index(pos.row, pos.col)?;
        if self.is_boundary(pos) {
            return Err(GameError::BoundaryNeighbor {
                row: pos.row,
                col: pos.col,
            });
        }
        let (dr, dc) = direction.delta();
        Ok(Position::new(
            pos.row.wrapping_add_signed(dr),
            pos.col.wrapping_add_signed(dc),
        ))
    }

    /// Neighbor of an interior cell. Callers must not pass boundary cells.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Position {
        match self.try_neighbor(pos, direction) {
            Ok(next) => next,
            Err(err) => out_of_bounds(err),
        }
    }

    pub fn north(&self, pos: Position) -> Position {
        self.neighbor(pos, Direction::North)
    }

    pub fn south(&self, pos: Position) -> Position {
        self.neighbor(pos, Direction::South)
    }

    pub fn east(&self, pos: Position) -> Position {
        self.neighbor(pos, Direction::East)
    }

    pub fn west(&self, pos: Position) -> Position {
        self.neighbor(pos, Direction::West)
    }

    /// All four neighbors in north, south, east, west order
    pub fn neighbors(&self, pos: Position) -> [Position; 4] {
        Direction::SEARCH_ORDER.map(|dir| self.neighbor(pos, dir))
    }

    /// First open neighbor in search order, else the northern one
    pub fn open_neighbor(&self, pos: Position) -> Position {
        let neighbors = self.neighbors(pos);
        neighbors
            .iter()
            .copied()
            .find(|&n| self.cell(n).is_open())
            .unwrap_or(neighbors[0])
    }

    /// Clear parent and added-to-search on every cell, walls included
    pub fn reset_cells_for_next_search(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search();
        }
    }

    /// Parent grid of the last search: `[r, c]` or `[null]` per cell,
    /// tab-terminated, one line per row
    pub fn parents_to_string(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                match cell.parent() {
                    Some(p) => out.push_str(&format!("[{}, {}]\t", p.row, p.col)),
                    None => out.push_str("[null]\t"),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.kind().symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cold]
fn out_of_bounds(err: GameError) -> ! {
    tracing::error!(%err, "illegal board access");
    panic!("{err}");
}
