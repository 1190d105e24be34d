use serde::{Deserialize, Serialize};

/// Compass direction on the board. Rows grow southward, columns eastward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbor scan order used by the autopilot search
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the (row, column) delta for moving in this direction
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Movement mode of the snake: a fixed heading, or the autopilot.
///
/// The autopilot variant still caches a heading so that a reversal while
/// the autopilot is engaged leaves a sane direction behind for the next
/// manual key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeMode {
    Going(Direction),
    Ai(Direction),
}

impl SnakeMode {
    pub fn is_ai(&self) -> bool {
        matches!(self, SnakeMode::Ai(_))
    }

    /// The manual heading, or the cached one while in autopilot
    pub fn heading(&self) -> Direction {
        match self {
            SnakeMode::Going(dir) | SnakeMode::Ai(dir) => *dir,
        }
    }

    /// Replace the heading without leaving autopilot
    pub fn with_heading(&self, heading: Direction) -> SnakeMode {
        match self {
            SnakeMode::Going(_) => SnakeMode::Going(heading),
            SnakeMode::Ai(_) => SnakeMode::Ai(heading),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SnakeMode::Ai(_) => "AI",
            SnakeMode::Going(Direction::North) => "north",
            SnakeMode::Going(Direction::South) => "south",
            SnakeMode::Going(Direction::East) => "east",
            SnakeMode::Going(Direction::West) => "west",
        }
    }
}

impl Default for SnakeMode {
    fn default() -> Self {
        SnakeMode::Going(Direction::East)
    }
}

/// Command accepted by the engine between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steer in a direction (leaves autopilot)
    SetDirection(Direction),
    /// Hand steering to the autopilot
    ToggleAi,
    /// Swap head and tail
    Reverse,
    /// Play the food-appear sound without touching state
    PlayFoodSound,
    /// Legacy catch-all for unmapped keys: head east unless in autopilot
    Fallback,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::SetDirection(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::North.delta(), (-1, 0));
        assert_eq!(Direction::South.delta(), (1, 0));
        assert_eq!(Direction::East.delta(), (0, 1));
        assert_eq!(Direction::West.delta(), (0, -1));
    }

    #[test]
    fn test_mode_keeps_ai_when_heading_changes() {
        let mode = SnakeMode::Ai(Direction::East);
        let turned = mode.with_heading(Direction::South);
        assert!(turned.is_ai());
        assert_eq!(turned.heading(), Direction::South);

        let manual = SnakeMode::Going(Direction::North).with_heading(Direction::West);
        assert_eq!(manual, SnakeMode::Going(Direction::West));
    }

    #[test]
    fn test_default_mode_is_east() {
        assert_eq!(SnakeMode::default(), SnakeMode::Going(Direction::East));
        assert_eq!(SnakeMode::default().label(), "east");
    }
}
