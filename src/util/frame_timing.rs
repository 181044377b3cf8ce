//! Frame clock that turns wall time into clamped controller steps.

use web_time::{Duration, Instant};

/// Default ceiling for a single frame step, in seconds.
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;

/// Per-frame delta-time source for the camera frame loop.
///
/// Large gaps (a suspended tab, a debugger pause) are clamped to
/// `max_dt` so the first-person integrator never takes one huge step.
pub struct FrameClock {
    /// Last tick timestamp, `None` before the first tick.
    last_tick: Option<Instant>,
    /// Largest step handed out, in seconds.
    max_dt: f32,
    /// Smoothed frames per second (exponential moving average).
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock that clamps steps to `max_dt` seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_tick: None,
            max_dt: if max_dt.is_finite() && max_dt > 0.0 {
                max_dt
            } else {
                DEFAULT_MAX_FRAME_DT
            },
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to now and return the clamped step in seconds.
    ///
    /// The first tick returns `0.0`.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return the clamped step in seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_dt)
    }

    /// Largest step this clock hands out.
    #[must_use]
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_DT)
    }
}
