//! Timer-free debounce and double-activation detection.
//!
//! Both utilities take the current time as an argument so they can be driven
//! by [`BrowserClock`] in the app and by plain numbers in tests.

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

// =============================================================================
// Debouncer
// =============================================================================

/// Holds the latest scheduled value until `delay_ms` passes without a newer one.
///
/// Each [`schedule`](Self::schedule) replaces the pending value and pushes the
/// deadline out. [`poll`](Self::poll) hands the value over once the deadline
/// is reached, so timers fired for superseded keystrokes find nothing to do.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace the pending value; returns the new deadline.
    pub fn schedule(&mut self, now_ms: f64, value: T) -> f64 {
        let deadline = now_ms + self.delay_ms;
        self.pending = Some((deadline, value));
        deadline
    }

    /// Take the pending value if its deadline has been reached.
    ///
    /// A clock that moved back past the scheduling time restarts the delay
    /// from `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let (deadline, _) = self.pending.as_mut()?;
        if *deadline - now_ms > self.delay_ms {
            *deadline = now_ms + self.delay_ms;
        }
        if now_ms >= *deadline {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    /// Time left before the pending value is due, if one is pending.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| (deadline - now_ms).clamp(0.0, self.delay_ms))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// Activation Detector
// =============================================================================

/// Outcome of activating (clicking or tapping) an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Single,
    Double,
}

/// Recognizes two activations of the same target within a threshold.
///
/// A double activation consumes both presses; a third press starts over.
#[derive(Clone, Debug)]
pub struct ActivationDetector {
    threshold_ms: f64,
    last: Option<(String, f64)>,
}

impl ActivationDetector {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            last: None,
        }
    }

    pub fn register(&mut self, target: &str, now_ms: f64) -> Activation {
        let is_double = self
            .last
            .as_ref()
            .is_some_and(|(prev, at)| prev == target && now_ms - at <= self.threshold_ms);

        if is_double {
            self.last = None;
            Activation::Double
        } else {
            self.last = Some((target.to_string(), now_ms));
            Activation::Single
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_only_last_value_fires() {
        let mut debouncer = Debouncer::new(300.0);
        debouncer.schedule(0.0, "d");
        debouncer.schedule(100.0, "do");
        debouncer.schedule(200.0, "doc");

        // Timers from the first two keystrokes find the deadline moved
        assert_eq!(debouncer.poll(300.0), None);
        assert_eq!(debouncer.poll(400.0), None);
        assert_eq!(debouncer.poll(500.0), Some("doc"));
        assert_eq!(debouncer.poll(800.0), None);
    }

    #[test]
    fn test_debounce_early_poll_reports_remaining() {
        let mut debouncer = Debouncer::new(300.0);
        debouncer.schedule(1000.0, "rep");
        assert_eq!(debouncer.poll(1299.0), None);
        assert_eq!(debouncer.remaining_ms(1299.0), Some(1.0));
        assert_eq!(debouncer.poll(1300.0), Some("rep"));
        assert_eq!(debouncer.remaining_ms(1300.0), None);
    }

    #[test]
    fn test_debounce_clock_moved_back() {
        let mut debouncer = Debouncer::new(300.0);
        debouncer.schedule(4_000_000.0, "rep");
        // Wall clock jumped back an hour before the timer fired
        assert_eq!(debouncer.poll(400_300.0), None);
        assert_eq!(debouncer.remaining_ms(400_300.0), Some(300.0));
        assert_eq!(debouncer.poll(400_600.0), Some("rep"));
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debouncer = Debouncer::new(300.0);
        debouncer.schedule(0.0, 1);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert_eq!(debouncer.poll(1000.0), None);
    }

    #[test]
    fn test_double_activation_within_threshold() {
        let mut detector = ActivationDetector::new(300.0);
        assert_eq!(detector.register("/a", 0.0), Activation::Single);
        assert_eq!(detector.register("/a", 250.0), Activation::Double);
        assert_eq!(detector.register("/a", 400.0), Activation::Single);
    }

    #[test]
    fn test_slow_or_different_target_is_single() {
        let mut detector = ActivationDetector::new(300.0);
        assert_eq!(detector.register("/a", 0.0), Activation::Single);
        assert_eq!(detector.register("/a", 301.0), Activation::Single);
        assert_eq!(detector.register("/b", 350.0), Activation::Single);
        detector.reset();
        assert_eq!(detector.register("/b", 360.0), Activation::Single);
    }
}
