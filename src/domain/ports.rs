use std::time::Duration;

/// Supplies the artificial pause inserted between validation and the output
/// write. Injectable so tests can substitute a zero delay instead of
/// sleeping the suite.
pub trait DelaySource {
    fn next_delay(&mut self) -> Duration;
}
