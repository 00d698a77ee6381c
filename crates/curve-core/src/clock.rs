use instant::Instant;

/// Millisecond time source used to gate frames and measure their cost.
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Monotonic clock measured from its creation.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock driven by hand; each read advances by `advance_per_read_ms`.
///
/// Setting the advance to the simulated frame cost makes the gate read and
/// the completion read of one tick differ by exactly that cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    pub now_ms: f64,
    pub advance_per_read_ms: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            advance_per_read_ms: 0.0,
        }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.now_ms;
        self.now_ms += self.advance_per_read_ms;
        now
    }
}
