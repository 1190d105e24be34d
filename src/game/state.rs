use super::{
    action::SnakeMode,
    board::Board,
    cell::{CellColor, CellType, Position},
    config::GameConfig,
    error::{GameError, Result},
    food::FoodSet,
    ports::GameView,
    snake::Snake,
};

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// Complete game state: the board plus everything living on it
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub food: FoodSet,
    pub game_over: bool,
    pub cycle_num: u64,
    /// Food eaten since the game began
    pub score: u32,
}

impl GameState {
    /// Fresh board from `config` with the snake at its start location
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut board = Board::new(config.num_cells_tall, config.num_cells_wide)?;
        let snake = Snake::place_at_start(&mut board);

        Ok(Self {
            board,
            snake,
            food: FoodSet::new(),
            game_over: false,
            cycle_num: 0,
            score: 0,
        })
    }

    /// Walled `rows` x `cols` board with a snake along `snake` (tail to head)
    /// and food on `food` (oldest first)
    pub fn from_layout(
        rows: usize,
        cols: usize,
        snake: &[Position],
        food: &[Position],
        mode: SnakeMode,
    ) -> Result<Self> {
        let mut board = Board::new(rows, cols)?;
        let snake = Snake::from_cells(&mut board, snake, mode)?;

        let mut food_set = FoodSet::new();
        for &pos in food {
            if !board.in_bounds(pos) {
                return Err(GameError::invalid_food(format!(
                    "({}, {}) is off the board",
                    pos.row, pos.col
                )));
            }
            if !food_set.place(&mut board, pos) {
                return Err(GameError::invalid_food(format!(
                    "({}, {}) is not an open cell",
                    pos.row, pos.col
                )));
            }
        }

        Ok(Self {
            board,
            snake,
            food: food_set,
            game_over: false,
            cycle_num: 0,
            score: 0,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Check that cell types agree with the snake, the food list and the walls
    pub fn verify_invariants(&self) -> Result<()> {
        let board = &self.board;

        if self.snake.len() < 2 {
            return Err(GameError::invalid_snake("shorter than 2 cells"));
        }
        let head = self.snake.head();
        for (i, pos) in self.snake.cells().enumerate() {
            let expected = if pos == head {
                CellType::Head
            } else {
                CellType::Body
            };
            if board.kind(pos) != expected {
                return Err(GameError::invalid_snake(format!(
                    "segment {i} at ({}, {}) is {:?}, expected {:?}",
                    pos.row,
                    pos.col,
                    board.kind(pos),
                    expected
                )));
            }
        }
        let heads = board.cells().filter(|c| c.is_head()).count();
        let bodies = board.cells().filter(|c| c.is_body()).count();
        if heads != 1 || heads + bodies != self.snake.len() {
            return Err(GameError::invalid_snake(format!(
                "board has {heads} heads and {bodies} bodies for a snake of {}",
                self.snake.len()
            )));
        }

        for pos in self.food.cells() {
            if !board.cell(pos).is_food() {
                return Err(GameError::invalid_food(format!(
                    "listed food at ({}, {}) is {:?}",
                    pos.row,
                    pos.col,
                    board.kind(pos)
                )));
            }
        }
        let food_cells = board.cells().filter(|c| c.is_food()).count();
        if food_cells != self.food.len() {
            return Err(GameError::invalid_food(format!(
                "{food_cells} food cells on the board, {} listed",
                self.food.len()
            )));
        }

        for cell in board.cells() {
            if cell.is_wall() != board.is_boundary(cell.position()) {
                return Err(GameError::CorruptBoard(format!(
                    "wall mismatch at ({}, {})",
                    cell.row(),
                    cell.col()
                )));
            }
        }
        Ok(())
    }
}

impl GameView for GameState {
    fn num_rows(&self) -> usize {
        self.board.num_rows()
    }

    fn num_columns(&self) -> usize {
        self.board.num_columns()
    }

    fn color_at(&self, row: usize, col: usize) -> CellColor {
        self.board.color_at(row, col)
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }
}
