//! One-shot, cancelable reveal timer driven by the frame clock.
//!
//! egui hands every frame the seconds elapsed since the app started
//! (`InputState::time`). The timer stores a deadline on that clock instead of
//! holding a platform callback, so cancelling is just forgetting the deadline
//! and the same code runs in the browser, on the desktop and in tests.

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    id: RoundId,
    due_at: f64,
}

#[derive(Debug, Default)]
pub struct RevealTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl RevealTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending task.
    pub fn schedule(&mut self, now: f64, delay: Duration) -> RoundId {
        if let Some(old) = self.pending.take() {
            tracing::debug!(round = %old.id, "replacing pending reveal");
        }
        self.next_id += 1;
        let id = RoundId(self.next_id);
        self.pending = Some(Pending {
            id,
            due_at: now + delay.as_secs_f64(),
        });
        id
    }

    pub fn cancel(&mut self) -> Option<RoundId> {
        let cancelled = self.pending.take().map(|p| p.id);
        if let Some(id) = cancelled {
            tracing::debug!(round = %id, "reveal cancelled");
        }
        cancelled
    }

    /// Returns the pending id once its deadline has passed, then disarms.
    pub fn poll(&mut self, now: f64) -> Option<RoundId> {
        match self.pending {
            Some(p) if now >= p.due_at => {
                self.pending = None;
                Some(p.id)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_round(&self) -> Option<RoundId> {
        self.pending.map(|p| p.id)
    }

    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.pending
            .map(|p| Duration::from_secs_f64((p.due_at - now).max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = RevealTimer::new();
        let id = timer.schedule(10.0, Duration::from_secs(5));
        assert_eq!(timer.poll(14.9), None);
        assert_eq!(timer.poll(15.0), Some(id));
        assert_eq!(timer.poll(16.0), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timer = RevealTimer::new();
        let id = timer.schedule(0.0, Duration::from_secs(1));
        assert_eq!(timer.cancel(), Some(id));
        assert_eq!(timer.poll(100.0), None);
        assert_eq!(timer.cancel(), None);
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut timer = RevealTimer::new();
        let first = timer.schedule(0.0, Duration::from_secs(1));
        let second = timer.schedule(0.5, Duration::from_secs(3));
        assert_ne!(first, second);
        assert_eq!(timer.pending_round(), Some(second));
        assert_eq!(timer.poll(1.0), None);
        assert_eq!(timer.poll(3.5), Some(second));
    }

    #[test]
    fn test_remaining_counts_down_and_saturates() {
        let mut timer = RevealTimer::new();
        assert_eq!(timer.remaining(0.0), None);
        timer.schedule(2.0, Duration::from_secs(10));
        assert_eq!(timer.remaining(7.0), Some(Duration::from_secs(5)));
        assert_eq!(timer.remaining(20.0), Some(Duration::ZERO));
    }
}
