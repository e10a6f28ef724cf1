use std::time::{Duration, Instant};

pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(180);

pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

struct Pending {
    width: f32,
    height: f32,
    armed_at: Instant,
}

impl ResizeDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    // A new signal always re-arms the timer, superseding any pending one.
    pub fn signal(&mut self, width: f32, height: f32, now: Instant) {
        self.pending = Some(Pending {
            width,
            height,
            armed_at: now,
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|pending| pending.armed_at + self.quiet_period)
    }

    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32)> {
        let pending = self.pending.as_ref()?;
        if now.duration_since(pending.armed_at) < self.quiet_period {
            return None;
        }

        let pending = self.pending.take()?;
        Some((pending.width, pending.height))
    }
}
