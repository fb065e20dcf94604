use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// By default `dt` is the raw monotonic delta between ticks (the first tick
/// measures from construction). Optional clamps bound it for drivers that get
/// paused by a debugger or minimised.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Option<Duration>,
    dt_max: Option<Duration>,
}

impl FrameClock {
    /// Creates an unclamped clock whose baseline is now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates an unclamped clock with an explicit baseline.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            dt_min: None,
            dt_max: None,
        }
    }

    /// Sets delta-time clamps. `None` leaves that side unbounded.
    pub fn with_clamps(mut self, dt_min: Option<Duration>, dt_max: Option<Duration>) -> Self {
        if let (Some(lo), Some(hi)) = (dt_min, dt_max) {
            debug_assert!(lo <= hi, "dt_min must not exceed dt_max");
        }
        self.dt_min = dt_min;
        self.dt_max = dt_max;
        self
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Number of ticks taken so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// An instant earlier than the previous tick yields `dt = 0`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        if let Some(lo) = self.dt_min {
            dt = dt.max(lo);
        }
        if let Some(hi) = self.dt_max {
            dt = dt.min(hi);
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
