/// Per-mode bookkeeping for shadowing and dictation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeProgress {
    /// Completed (problem, answer, evaluation) rounds.
    pub count: u32,
    /// Set until the mode generates its first problem.
    pub first: bool,
}

impl ModeProgress {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for ModeProgress {
    fn default() -> Self {
        Self {
            count: 0,
            first: true,
        }
    }
}
