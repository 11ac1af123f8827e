use std::time::Duration;

/// Quiet period after the last keystroke before the search text applies.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Trailing-edge debouncer driven by external timers.
///
/// `input` stores the pending value and returns a token; the caller schedules
/// a timer carrying that token and calls `settle` when it fires. Only the
/// newest token releases the value.
#[derive(Debug, Clone, Default)]
pub struct Debouncer<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn input(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    pub fn settle(&mut self, token: u64) -> Option<T> {
        if token != self.generation {
            return None;
        }
        self.pending.take()
    }
}
