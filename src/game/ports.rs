//! Narrow interfaces between the engine and its collaborators.
//!
//! The engine never draws or plays anything itself: it hands a read-only
//! [`GameView`] to a [`ViewPort`] and fires [`SoundEvent`]s at an
//! [`AudioPort`]. Both sinks are fire-and-forget.

use super::cell::CellColor;

/// Discrete sounds the engine asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Food appeared (also on request)
    FoodAppear,
    /// The snake ate food
    Crunch,
    /// The game ended
    Meow,
}

impl SoundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEvent::FoodAppear => "food",
            SoundEvent::Crunch => "crunch",
            SoundEvent::Meow => "meow",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            SoundEvent::FoodAppear => 1,
            SoundEvent::Crunch => 2,
            SoundEvent::Meow => 4,
        }
    }
}

/// Sounds already emitted in the current cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundSet(u8);

impl SoundSet {
    /// Mark `event`; returns false if it was already marked
    pub fn insert(&mut self, event: SoundEvent) -> bool {
        let fresh = self.0 & event.bit() == 0;
        self.0 |= event.bit();
        fresh
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// Audio player
pub trait AudioPort {
    fn play(&mut self, event: SoundEvent);
}

/// Records every event, in order
impl AudioPort for Vec<SoundEvent> {
    fn play(&mut self, event: SoundEvent) {
        self.push(event);
    }
}

impl AudioPort for () {
    fn play(&mut self, _event: SoundEvent) {}
}

/// What a renderer may ask about the game
pub trait GameView {
    fn num_rows(&self) -> usize;
    fn num_columns(&self) -> usize;
    fn color_at(&self, row: usize, col: usize) -> CellColor;
    fn is_game_over(&self) -> bool;
}

/// Renderer; the view reference is only valid for the duration of the call
pub trait ViewPort {
    fn render(&mut self, view: &dyn GameView);
}

impl ViewPort for () {
    fn render(&mut self, _view: &dyn GameView) {}
}

/// Owned copy of a view, for renderers that draw later
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    colors: Vec<CellColor>,
    game_over: bool,
    frames: u64,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders captured so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl ViewPort for Snapshot {
    fn render(&mut self, view: &dyn GameView) {
        self.rows = view.num_rows();
        self.cols = view.num_columns();
        self.colors.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.colors.push(view.color_at(row, col));
            }
        }
        self.game_over = view.is_game_over();
        self.frames += 1;
    }
}

impl GameView for Snapshot {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.cols
    }

    fn color_at(&self, row: usize, col: usize) -> CellColor {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} snapshot",
            self.rows,
            self.cols
        );
        self.colors[row * self.cols + col]
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_set_dedupes() {
        let mut set = SoundSet::default();
        assert!(set.insert(SoundEvent::Crunch));
        assert!(!set.insert(SoundEvent::Crunch));
        assert!(set.insert(SoundEvent::Meow));
        assert!(!set.insert(SoundEvent::Meow));

        set.clear();
        assert!(set.insert(SoundEvent::Crunch));
        assert!(set.insert(SoundEvent::FoodAppear));
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut audio: Vec<SoundEvent> = Vec::new();
        audio.play(SoundEvent::FoodAppear);
        audio.play(SoundEvent::Crunch);
        assert_eq!(audio, vec![SoundEvent::FoodAppear, SoundEvent::Crunch]);
    }

    struct Checker;

    impl GameView for Checker {
        fn num_rows(&self) -> usize {
            2
        }
        fn num_columns(&self) -> usize {
            3
        }
        fn color_at(&self, row: usize, col: usize) -> CellColor {
            if (row + col) % 2 == 0 {
                CellColor::Black
            } else {
                CellColor::White
            }
        }
        fn is_game_over(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_snapshot_copies_view() {
        let mut snapshot = Snapshot::new();
        snapshot.render(&Checker);

        assert_eq!(snapshot.num_rows(), 2);
        assert_eq!(snapshot.num_columns(), 3);
        assert_eq!(snapshot.color_at(1, 2), CellColor::White);
        assert_eq!(snapshot.color_at(1, 1), CellColor::Black);
        assert!(snapshot.is_game_over());
        assert_eq!(snapshot.frames(), 1);
    }
}
