use std::collections::VecDeque;

use rand::Rng;

use super::{board::Board, cell::Position};

/// Outcome of one attempt to add food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPlacement {
    Placed(Position),
    /// Too little of the board is free; nothing was added
    BoardFull,
}

/// Food cells on the board, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSet {
    cells: VecDeque<Position>,
}

impl FoodSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Food positions, oldest first
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    pub fn oldest(&self) -> Option<Position> {
        self.cells.front().copied()
    }

    /// Record food on an open cell. Returns false if the cell is not open.
    pub fn place(&mut self, board: &mut Board, pos: Position) -> bool {
        let cell = board.cell_mut(pos);
        if !cell.is_open() {
            return false;
        }
        cell.become_food();
        self.cells.push_back(pos);
        true
    }

    /// Try to put food on a random open cell.
    ///
    /// Samples the whole board, walls included. Occupied samples are retried
    /// for as long as some cell is free and the free ratio stays at or above
    /// `min_free_ratio`.
    pub fn add_food<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        snake_len: usize,
        min_free_ratio: f64,
        rng: &mut R,
    ) -> FoodPlacement {
        let total = board.total_cells() as f64;
        loop {
            let row = rng.gen_range(0..board.num_rows());
            let col = rng.gen_range(0..board.num_columns());
            let pos = Position::new(row, col);

            if self.place(board, pos) {
                tracing::debug!(row, col, food = self.len(), "food placed");
                return FoodPlacement::Placed(pos);
            }

            let free = board.free_spots() as f64 - snake_len as f64 - self.len() as f64;
            let ratio = free / total;
            if free <= 0.0 || ratio < min_free_ratio {
                tracing::warn!(ratio, "not adding more food");
                return FoodPlacement::BoardFull;
            }
        }
    }

    /// Drop a specific food cell from the list; the cell type is left to the caller
    pub fn consume(&mut self, pos: Position) -> bool {
        match self.cells.iter().position(|&p| p == pos) {
            Some(idx) => {
                self.cells.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Retire the oldest food, reopening its cell
    pub fn remove_oldest(&mut self, board: &mut Board) -> Option<Position> {
        let pos = self.cells.pop_front()?;
        board.cell_mut(pos).become_open();
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_add_food_lands_on_open_cell() {
        let mut board = Board::new(8, 8).unwrap();
        let mut food = FoodSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..5 {
            match food.add_food(&mut board, 2, 0.2, &mut rng) {
                FoodPlacement::Placed(pos) => {
                    assert!(!board.is_boundary(pos));
                    assert!(board.cell(pos).is_food());
                }
                FoodPlacement::BoardFull => panic!("board should have room"),
            }
        }
        assert_eq!(food.len(), 5);
        assert_eq!(board.cells().filter(|c| c.is_food()).count(), 5);
    }

    #[test]
    fn test_add_food_gives_up_when_crowded() {
        // 36 cells, 16 interior; 16 - 2 - 13 = 1 free => ratio 1/36 < 0.2
        let mut board = Board::new(6, 6).unwrap();
        let mut food = FoodSet::new();
        let interior: Vec<Position> = board
            .cells()
            .filter(|c| c.is_open())
            .map(|c| c.position())
            .collect();
        for &pos in interior.iter().skip(3) {
            assert!(food.place(&mut board, pos));
        }
        board.cell_mut(interior[0]).become_body();
        board.cell_mut(interior[1]).become_head();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // The single open cell may still be hit by luck; either way the call returns
        let outcome = food.add_food(&mut board, 2, 0.2, &mut rng);
        match outcome {
            FoodPlacement::Placed(pos) => assert_eq!(pos, interior[2]),
            FoodPlacement::BoardFull => assert_eq!(food.len(), 13),
        }
    }

    #[test]
    fn test_add_food_returns_on_full_board_without_ratio() {
        // 2x2 interior holds the snake and two food
        let mut board = Board::new(4, 4).unwrap();
        let mut food = FoodSet::new();
        board.cell_mut(Position::new(1, 1)).become_body();
        board.cell_mut(Position::new(1, 2)).become_head();
        assert!(food.place(&mut board, Position::new(2, 1)));
        assert!(food.place(&mut board, Position::new(2, 2)));

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            food.add_food(&mut board, 2, 0.0, &mut rng),
            FoodPlacement::BoardFull
        );
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new(6, 6).unwrap();
        let mut food = FoodSet::new();
        assert!(!food.place(&mut board, Position::new(0, 0)));
        assert!(food.place(&mut board, Position::new(2, 2)));
        assert!(!food.place(&mut board, Position::new(2, 2)));
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn test_remove_oldest() {
        let mut board = Board::new(6, 6).unwrap();
        let mut food = FoodSet::new();
        food.place(&mut board, Position::new(2, 2));
        food.place(&mut board, Position::new(3, 3));

        assert_eq!(food.remove_oldest(&mut board), Some(Position::new(2, 2)));
        assert!(board.cell(Position::new(2, 2)).is_open());
        assert_eq!(food.oldest(), Some(Position::new(3, 3)));

        food.remove_oldest(&mut board);
        assert_eq!(food.remove_oldest(&mut board), None);
    }

    #[test]
    fn test_consume() {
        let mut board = Board::new(6, 6).unwrap();
        let mut food = FoodSet::new();
        food.place(&mut board, Position::new(2, 2));
        food.place(&mut board, Position::new(3, 3));

        assert!(food.consume(Position::new(3, 3)));
        assert!(!food.consume(Position::new(3, 3)));
        assert_eq!(food.cells().collect::<Vec<_>>(), vec![Position::new(2, 2)]);
    }
}
