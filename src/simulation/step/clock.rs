/// Turns host refresh timestamps into per-tick `dt`.
///
/// The first timestamp becomes the baseline, so the first tick integrates
/// with `dt = 0` whatever epoch the host counts from. Timestamps that go
/// backwards, or are not finite, also yield `dt = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous call.
    pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ms
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
