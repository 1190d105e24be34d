use std::collections::VecDeque;

use super::{
    action::{Direction, SnakeMode},
    board::Board,
    cell::Position,
    error::{GameError, Result},
};

/// Where a new snake starts: tail first, then head
pub const START_CELLS: [Position; 2] = [Position { row: 1, col: 1 }, Position { row: 1, col: 2 }];

/// The snake: board positions ordered from tail to head, plus its mode.
///
/// The cells themselves belong to the [`Board`]; every mutation here keeps
/// their types in step (last element HEAD, every other element BODY).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    cells: VecDeque<Position>,
    mode: SnakeMode,
}

impl Snake {
    /// Put a two-cell snake in the upper-left corner, heading east
    pub fn place_at_start(board: &mut Board) -> Self {
        let [tail, head] = START_CELLS;
        board.cell_mut(tail).become_body();
        board.cell_mut(head).become_head();

        Self {
            cells: VecDeque::from(START_CELLS.to_vec()),
            mode: SnakeMode::default(),
        }
    }

    /// Place a snake along `cells` (tail to head) on open interior cells
    pub fn from_cells(board: &mut Board, cells: &[Position], mode: SnakeMode) -> Result<Self> {
        if cells.len() < 2 {
            return Err(GameError::invalid_snake(format!(
                "needs at least 2 cells, got {}",
                cells.len()
            )));
        }
        for (i, &pos) in cells.iter().enumerate() {
            if !board.in_bounds(pos) || board.is_boundary(pos) {
                return Err(GameError::invalid_snake(format!(
                    "({}, {}) is not an interior cell",
                    pos.row, pos.col
                )));
            }
            if !board.cell(pos).is_open() {
                return Err(GameError::invalid_snake(format!(
                    "({}, {}) is already occupied",
                    pos.row, pos.col
                )));
            }
            if cells[..i].contains(&pos) {
                return Err(GameError::invalid_snake(format!(
                    "({}, {}) appears twice",
                    pos.row, pos.col
                )));
            }
            if i > 0 && !cells[i - 1].is_adjacent(pos) {
                return Err(GameError::invalid_snake(format!(
                    "({}, {}) does not touch the previous segment",
                    pos.row, pos.col
                )));
            }
        }

        let head = cells.len() - 1;
        for &pos in &cells[..head] {
            board.cell_mut(pos).become_body();
        }
        board.cell_mut(cells[head]).become_head();

        Ok(Self {
            cells: cells.iter().copied().collect(),
            mode,
        })
    }

    pub fn head(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    pub fn tail(&self) -> Position {
        self.cells[0]
    }

    /// The segment right behind the head
    pub fn neck(&self) -> Position {
        self.cells[self.cells.len() - 2]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a placed snake
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Segments from tail to head
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn mode(&self) -> SnakeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SnakeMode) {
        self.mode = mode;
    }

    pub fn in_ai_mode(&self) -> bool {
        self.mode.is_ai()
    }

    /// Head's neighbor along the current heading; `None` in autopilot
    pub fn next_cell_in_direction(&self, board: &Board) -> Option<Position> {
        match self.mode {
            SnakeMode::Going(dir) => Some(board.neighbor(self.head(), dir)),
            SnakeMode::Ai(_) => None,
        }
    }

    /// Move the head into `next`, keeping the tail when `grow` is set.
    ///
    /// `next` must be adjacent to the head and neither wall nor body; the
    /// engine checks collisions before calling this.
    pub fn advance(&mut self, board: &mut Board, next: Position, grow: bool) {
        debug_assert!(self.head().is_adjacent(next));
        debug_assert!(!board.cell(next).is_blocked());

        let old_head = self.head();
        board.cell_mut(old_head).become_body();
        board.cell_mut(next).become_head();
        self.cells.push_back(next);

        if !grow {
            if let Some(tail) = self.cells.pop_front() {
                board.cell_mut(tail).become_open();
            }
        }
        self.remember_heading(old_head, next);
    }

    fn remember_heading(&mut self, from: Position, to: Position) {
        if let Some(dir) = step_direction(from, to) {
            self.mode = self.mode.with_heading(dir);
        }
    }

    /// Swap head and tail, then point the snake away from its new neck.
    ///
    /// Autopilot stays engaged; only its cached heading changes.
    pub fn reverse(&mut self, board: &mut Board) {
        board.cell_mut(self.head()).become_body();
        self.cells.make_contiguous().reverse();
        board.cell_mut(self.head()).become_head();

        let heading = self.heading_from_neck();
        self.mode = self.mode.with_heading(heading);
    }

    /// Direction that moves the head straight away from the neck
    pub fn heading_from_neck(&self) -> Direction {
        let (head, neck) = (self.head(), self.neck());
        if neck.row < head.row {
            Direction::South
        } else if neck.row > head.row {
            Direction::North
        } else if neck.col > head.col {
            Direction::West
        } else {
            Direction::East
        }
    }
}

/// Direction of a single step between adjacent cells
fn step_direction(from: Position, to: Position) -> Option<Direction> {
    Direction::SEARCH_ORDER.into_iter().find(|dir| {
        let (dr, dc) = dir.delta();
        from.row.checked_add_signed(dr) == Some(to.row)
            && from.col.checked_add_signed(dc) == Some(to.col)
    })
}
