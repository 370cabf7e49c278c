use std::time::{Duration, Instant};

/// Fixed-interval timer that samples the pointer while a drag is held.
/// Once cancelled it stays silent until started again.
#[derive(Debug, Clone)]
pub struct DragTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl DragTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Fires at most once per call and re-arms one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
