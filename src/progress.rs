// src/progress.rs
/// Lightweight status reporting for batch processing. Frontends implement
/// this to surface rejected lines and totals to users.
pub trait Progress {
    /// Called at the start with the number of lines in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called for each non-blank line: its 1-based number and whether it
    /// was applied.
    fn line_done(&mut self, _line_no: usize, _applied: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
