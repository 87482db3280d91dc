//! Highlight selection state machine.
//!
//! Tracks which row of the displayed list is highlighted. `None` is the
//! idle state: fresh results leave nothing highlighted until the user
//! navigates. Movement wraps cyclically over however many rows are shown.

/// Navigation direction, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Cursor over the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted row, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_idle(&self) -> bool {
        self.index.is_none()
    }

    /// Move the highlight over a list of `len` rows.
    ///
    /// From idle, forward lands on the first row and backward on the last.
    /// At the edges the highlight wraps around. An empty list is a no-op.
    pub fn advance(&mut self, direction: Direction, len: usize) {
        if len == 0 {
            return;
        }

        self.index = Some(match (self.index, direction) {
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => len - 1,
            (Some(i), Direction::Forward) => (i + 1) % len,
            (Some(0), Direction::Backward) => len - 1,
            (Some(i), Direction::Backward) => i - 1,
        });
    }

    /// Take the highlighted index, returning to idle. Idle yields `None`.
    pub fn confirm(&mut self) -> Option<usize> {
        self.index.take()
    }

    /// Return to idle.
    pub fn reset(&mut self) {
        self.index = None;
    }
}
