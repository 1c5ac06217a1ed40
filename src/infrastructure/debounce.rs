//! Debounced value emitter.
//!
//! Converts a rapidly changing input value into a delayed, settled value,
//! suppressing intermediate states. Every update restarts the delay timer; a
//! pending value is only committed once it has remained unchanged for the
//! full delay. This is a generic, reusable primitive with no knowledge of the
//! list domain.
//!
//! All timing flows through explicit [`Instant`] parameters supplied by the
//! caller's event loop (typically from a periodic tick), which keeps the
//! emitter fully deterministic under test. Dropping the emitter discards any
//! pending value with no emission.

use std::time::{Duration, Instant};

/// A value buffered behind a settle delay.
///
/// Candidate value together with the moment it last changed.
#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    since: Instant,
}

/// Debounced value emitter.
///
/// Holds the most recent value that has remained unchanged for at least the
/// configured delay. The initial value is settled immediately (no artificial
/// initial delay).
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use catalist::infrastructure::Debounced;
///
/// let start = Instant::now();
/// let mut input = Debounced::new(String::new(), Duration::from_millis(500));
///
/// input.update("b".to_string(), start);
/// input.update("ba".to_string(), start + Duration::from_millis(50));
/// input.update("bat".to_string(), start + Duration::from_millis(100));
///
/// // Nothing settles before the delay elapses after the *last* edit.
/// assert_eq!(input.poll(start + Duration::from_millis(550)), None);
/// assert_eq!(
///     input.poll(start + Duration::from_millis(600)),
///     Some("bat".to_string()),
/// );
/// assert_eq!(input.value(), "bat");
/// ```
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    /// Last settled value.
    current: T,

    /// Candidate value waiting out the delay, if any.
    pending: Option<Pending<T>>,

    /// How long a value must remain unchanged before settling.
    delay: Duration,
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// Creates an emitter whose settled value starts as `initial`.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            current: initial,
            pending: None,
            delay,
        }
    }

    /// Feeds a new input value, restarting the delay timer.
    ///
    /// An update equal to the value already pending (or, with nothing
    /// pending, equal to the settled value) does not restart the timer:
    /// only actual changes delay settling.
    pub fn update(&mut self, value: T, now: Instant) {
        match &self.pending {
            Some(pending) if pending.value == value => {}
            None if value == self.current => {}
            _ => self.pending = Some(Pending { value, since: now }),
        }
    }

    /// Settles the pending value if its delay has fully elapsed.
    ///
    /// Returns the newly settled value exactly once per settle; later polls
    /// return `None` until the input changes again. A value is never emitted
    /// before the timer naturally elapses.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let elapsed = now.checked_duration_since(self.pending.as_ref()?.since)?;
        if elapsed < self.delay {
            return None;
        }
        let settled = self.pending.take()?.value;
        self.current = settled.clone();
        Some(settled)
    }

    /// The current settled value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.current
    }

    /// Whether an input change is still waiting out the delay.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn initial_value_is_settled_without_delay() {
        let input = Debounced::new("seed", ms(500));
        assert_eq!(*input.value(), "seed");
        assert!(!input.is_pending());
    }

    #[test]
    fn rapid_edits_emit_only_the_final_value() {
        let start = Instant::now();
        let mut input = Debounced::new(String::new(), ms(500));

        input.update("b".into(), start);
        input.update("ba".into(), start + ms(50));
        input.update("bat".into(), start + ms(100));

        // 500ms after "b" but only 450ms after "bat": nothing settles.
        assert_eq!(input.poll(start + ms(550)), None);
        assert_eq!(*input.value(), "");

        // 500ms of silence after the last edit.
        assert_eq!(input.poll(start + ms(600)), Some("bat".into()));
        assert_eq!(*input.value(), "bat");
    }

    #[test]
    fn every_change_restarts_the_timer() {
        let start = Instant::now();
        let mut input = Debounced::new(0u32, ms(100));

        input.update(1, start);
        assert_eq!(input.poll(start + ms(99)), None);
        input.update(2, start + ms(99));
        assert_eq!(input.poll(start + ms(150)), None);
        assert_eq!(input.poll(start + ms(199)), Some(2));
    }

    #[test]
    fn settling_is_reported_exactly_once() {
        let start = Instant::now();
        let mut input = Debounced::new(0u32, ms(100));

        input.update(7, start);
        assert_eq!(input.poll(start + ms(100)), Some(7));
        assert_eq!(input.poll(start + ms(200)), None);
    }

    #[test]
    fn updating_back_to_the_settled_value_is_a_no_op() {
        let start = Instant::now();
        let mut input = Debounced::new("bat".to_string(), ms(100));

        input.update("bat".into(), start);
        assert!(!input.is_pending());
        assert_eq!(input.poll(start + ms(500)), None);
    }

    #[test]
    fn repeating_the_pending_value_does_not_restart_the_timer() {
        let start = Instant::now();
        let mut input = Debounced::new(String::new(), ms(100));

        input.update("x".into(), start);
        input.update("x".into(), start + ms(90));
        assert_eq!(input.poll(start + ms(100)), Some("x".into()));
    }

    #[test]
    fn poll_before_the_pending_instant_emits_nothing() {
        // A tick carrying an earlier timestamp than the edit must not settle;
        // checked_duration_since keeps this from panicking.
        let start = Instant::now();
        let mut input = Debounced::new(0u32, ms(100));

        input.update(1, start + ms(50));
        assert_eq!(input.poll(start), None);
    }
}
