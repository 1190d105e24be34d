//! Breadth-first autopilot.
//!
//! The search writes its bookkeeping (`parent`, `added_to_search`) straight
//! onto the board cells, so every search starts by resetting the board.
//! It stops the moment a food cell is first discovered, which makes the
//! resulting parent grid part of the observable behavior.

use std::collections::VecDeque;

use super::{action::Direction, board::Board, cell::Position};

/// Result of one autopilot search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Nearest food, if any was reachable
    pub goal: Option<Position>,
    /// Where the head should go next
    pub next: Position,
}

/// Search from `head` to the nearest food and pick the next head cell.
///
/// Falls back to the first open neighbor of the head when no food is
/// reachable.
pub fn search(board: &mut Board, head: Position) -> SearchOutcome {
    let goal = find_nearest_food(board, head);
    let next = goal
        .and_then(|goal| first_cell_in_path(board, goal, head))
        .unwrap_or_else(|| board.open_neighbor(head));

    tracing::debug!(?head, ?goal, ?next, "autopilot search");
    SearchOutcome { goal, next }
}

/// Next head cell along a shortest path to the nearest food
pub fn next_cell_from_bfs(board: &mut Board, head: Position) -> Position {
    search(board, head).next
}

/// Run the search and return the food cell it stopped on.
///
/// Neighbors are scanned north, south, east, west. Walls and snake bodies
/// are never entered; food is entered and ends the search immediately.
pub fn find_nearest_food(board: &mut Board, head: Position) -> Option<Position> {
    board.reset_cells_for_next_search();

    let mut queue = VecDeque::with_capacity(board.free_spots());
    board.cell_mut(head).set_added_to_search();
    queue.push_back(head);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::SEARCH_ORDER {
            let next = board.neighbor(current, dir);
            let cell = board.cell_mut(next);
            if cell.is_blocked() || cell.added_to_search() {
                continue;
            }

            cell.set_parent(current);
            cell.set_added_to_search();

            if cell.is_food() {
                return Some(next);
            }
            queue.push_back(next);
        }
    }

    None
}

/// Follow parents back from `goal` to the cell whose parent is `head`.
///
/// Returns `None` if the chain never reaches `head`, which only happens when
/// the parent grid did not come from a search rooted at `head`.
pub fn first_cell_in_path(board: &Board, goal: Position, head: Position) -> Option<Position> {
    let mut current = goal;
    loop {
        match board.cell(current).parent() {
            Some(parent) if parent == head => return Some(current),
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Cells of the discovered path from `goal` back to the search source,
/// both ends included
pub fn path_from(board: &Board, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = board.cell(current).parent() {
        path.push(parent);
        current = parent;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn start_board() -> Board {
        let mut board = Board::new(6, 6).unwrap();
        board.cell_mut(pos(1, 1)).become_body();
        board.cell_mut(pos(1, 2)).become_head();
        board
    }

    #[test]
    fn test_adjacent_food() {
        let mut board = start_board();
        board.cell_mut(pos(2, 2)).become_food();

        let outcome = search(&mut board, pos(1, 2));
        assert_eq!(outcome.goal, Some(pos(2, 2)));
        assert_eq!(outcome.next, pos(2, 2));
        assert_eq!(board.cell(pos(2, 2)).parent(), Some(pos(1, 2)));
        // Search stopped before east was scanned
        assert!(!board.cell(pos(1, 3)).added_to_search());
    }

    #[test]
    fn test_head_has_no_parent() {
        let mut board = start_board();
        board.cell_mut(pos(4, 4)).become_food();

        search(&mut board, pos(1, 2));
        assert!(board.cell(pos(1, 2)).added_to_search());
        assert_eq!(board.cell(pos(1, 2)).parent(), None);
    }

    #[test]
    fn test_body_blocks_search() {
        let mut board = start_board();
        // Wall off the head: south and east become body
        board.cell_mut(pos(2, 2)).become_body();
        board.cell_mut(pos(1, 3)).become_body();
        board.cell_mut(pos(4, 4)).become_food();

        let outcome = search(&mut board, pos(1, 2));
        assert_eq!(outcome.goal, None);
        // No open neighbor: fall back to the northern wall
        assert_eq!(outcome.next, pos(0, 2));
    }

    #[test]
    fn test_path_from_goal() {
        let mut board = start_board();
        board.cell_mut(pos(1, 4)).become_food();

        let goal = find_nearest_food(&mut board, pos(1, 2)).unwrap();
        assert_eq!(path_from(&board, goal), vec![pos(1, 4), pos(1, 3), pos(1, 2)]);
        assert_eq!(first_cell_in_path(&board, goal, pos(1, 2)), Some(pos(1, 3)));
    }

    #[test]
    fn test_stale_bookkeeping_is_cleared() {
        let mut board = start_board();
        board.cell_mut(pos(4, 4)).set_parent(pos(4, 3));
        board.cell_mut(pos(4, 4)).set_added_to_search();
        board.cell_mut(pos(4, 4)).become_food();

        let goal = find_nearest_food(&mut board, pos(1, 2));
        assert_eq!(goal, Some(pos(4, 4)));
        let path = path_from(&board, pos(4, 4));
        assert_eq!(path.last(), Some(&pos(1, 2)));
        assert_eq!(path.len() - 1, pos(1, 2).manhattan(pos(4, 4)));
    }
}
