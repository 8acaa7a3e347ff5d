//! Frame clock producing bounded time deltas.

use log::warn;

/// Clamp a raw frame delta to [0, max_dt]; NaN becomes 0
pub fn clamp_dt(raw_dt: f32, max_dt: f32) -> f32 {
    if raw_dt.is_nan() {
        return 0.0;
    }
    // min/max instead of clamp: never panics on a NaN bound
    raw_dt.max(0.0).min(max_dt)
}

/// Tracks the previous update time and yields clamped deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time_s: f32,
    max_dt_s: f32,
}

impl FrameClock {
    /// Clock with reference time zero
    pub fn new(max_dt_s: f32) -> Self {
        Self {
            last_time_s: 0.0,
            max_dt_s,
        }
    }

    /// Advance to `now_s` and return the clamped delta since the last tick
    ///
    /// The reference time always moves to `now_s`, so a clock reset costs a
    /// single zero-length frame.
    pub fn tick(&mut self, now_s: f32) -> f32 {
        let raw_dt = now_s - self.last_time_s;
        self.last_time_s = now_s;

        let dt = clamp_dt(raw_dt, self.max_dt_s);
        if dt != raw_dt {
            warn!("frame delta {:.4}s clamped to {:.4}s", raw_dt, dt);
        }
        dt
    }

    pub fn last_time(&self) -> f32 {
        self.last_time_s
    }
}
