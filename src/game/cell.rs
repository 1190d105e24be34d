use serde::{Deserialize, Serialize};

/// A location on the board, used as the handle for cells in the board arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance, ignoring obstacles
    pub fn manhattan(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// What currently occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Wall,
    Open,
    Food,
    Head,
    Body,
}

impl CellType {
    /// Single-character form used by the board's text rendering
    pub fn symbol(&self) -> char {
        match self {
            CellType::Wall => '*',
            CellType::Open => ' ',
            CellType::Food => 'F',
            CellType::Head => 'H',
            CellType::Body => 'B',
        }
    }

    pub fn color(&self) -> CellColor {
        match self {
            CellType::Wall => CellColor::Blue,
            CellType::Open => CellColor::White,
            CellType::Food => CellColor::Orange,
            CellType::Head => CellColor::Black,
            CellType::Body => CellColor::Green,
        }
    }

    /// Walls and snake bodies stop both movement and search
    pub fn is_blocked(&self) -> bool {
        matches!(self, CellType::Wall | CellType::Body)
    }
}

/// Display color of a cell, a pure function of its type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Blue,
    White,
    Orange,
    Black,
    Green,
}

impl CellColor {
    /// Blue tint painted behind the board
    pub const BACKGROUND: (u8, u8, u8) = (52, 152, 219);

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            CellColor::Blue => (0, 0, 255),
            CellColor::White => (255, 255, 255),
            CellColor::Orange => (255, 200, 0),
            CellColor::Black => (0, 0, 0),
            CellColor::Green => (0, 255, 0),
        }
    }
}

/// One board location plus the bookkeeping of the most recent search.
///
/// `parent` and `added_to_search` only mean something between a call to
/// [`crate::game::Board::reset_cells_for_next_search`] and the end of that
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    kind: CellType,
    parent: Option<Position>,
    added_to_search: bool,
}

impl Cell {
    pub fn new(position: Position, kind: CellType) -> Self {
        Self {
            position,
            kind,
            parent: None,
            added_to_search: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn kind(&self) -> CellType {
        self.kind
    }

    pub fn become_wall(&mut self) {
        self.kind = CellType::Wall;
    }

    pub fn become_open(&mut self) {
        self.kind = CellType::Open;
    }

    pub fn become_food(&mut self) {
        self.kind = CellType::Food;
    }

    pub fn become_head(&mut self) {
        self.kind = CellType::Head;
    }

    pub fn become_body(&mut self) {
        self.kind = CellType::Body;
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellType::Wall
    }

    pub fn is_open(&self) -> bool {
        self.kind == CellType::Open
    }

    pub fn is_food(&self) -> bool {
        self.kind == CellType::Food
    }

    pub fn is_head(&self) -> bool {
        self.kind == CellType::Head
    }

    pub fn is_body(&self) -> bool {
        self.kind == CellType::Body
    }

    pub fn is_blocked(&self) -> bool {
        self.kind.is_blocked()
    }

    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Position) {
        self.parent = Some(parent);
    }

    pub fn added_to_search(&self) -> bool {
        self.added_to_search
    }

    pub fn set_added_to_search(&mut self) {
        self.added_to_search = true;
    }

    /// Forget everything the previous search recorded here
    pub fn clear_search(&mut self) {
        self.parent = None;
        self.added_to_search = false;
    }

    pub fn color(&self) -> CellColor {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_transitions() {
        let mut cell = Cell::new(Position::new(2, 3), CellType::Open);
        assert!(cell.is_open());

        cell.become_food();
        assert!(cell.is_food());
        assert!(!cell.is_open());

        cell.become_head();
        assert!(cell.is_head());

        cell.become_body();
        assert!(cell.is_body());
        assert!(cell.is_blocked());

        cell.become_open();
        assert!(!cell.is_blocked());
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
    }

    #[test]
    fn test_clear_search_resets_both_fields() {
        let mut cell = Cell::new(Position::new(1, 1), CellType::Open);
        cell.set_parent(Position::new(1, 2));
        cell.set_added_to_search();
        assert_eq!(cell.parent(), Some(Position::new(1, 2)));
        assert!(cell.added_to_search());

        cell.clear_search();
        assert_eq!(cell.parent(), None);
        assert!(!cell.added_to_search());
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(CellType::Wall.color(), CellColor::Blue);
        assert_eq!(CellType::Open.color(), CellColor::White);
        assert_eq!(CellType::Food.color(), CellColor::Orange);
        assert_eq!(CellType::Head.color(), CellColor::Black);
        assert_eq!(CellType::Body.color(), CellColor::Green);
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(3, 3);
        assert!(pos.is_adjacent(Position::new(2, 3)));
        assert!(pos.is_adjacent(Position::new(3, 4)));
        assert!(!pos.is_adjacent(Position::new(4, 4)));
        assert!(!pos.is_adjacent(pos));
    }
}
