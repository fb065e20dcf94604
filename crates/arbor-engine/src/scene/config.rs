use std::time::Duration;

use crate::coords::Viewport;
use crate::time::FrameClock;

/// Scene construction parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneConfig {
    /// Surface size the initial camera is shaped for.
    pub viewport: Viewport,
    /// Lower bound on the measured frame delta. `None` = unbounded.
    pub dt_min: Option<Duration>,
    /// Upper bound on the measured frame delta. `None` = unbounded.
    pub dt_max: Option<Duration>,
}

impl SceneConfig {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_dt_clamps(mut self, dt_min: Option<Duration>, dt_max: Option<Duration>) -> Self {
        self.dt_min = dt_min;
        self.dt_max = dt_max;
        self
    }

    pub(crate) fn frame_clock(&self) -> FrameClock {
        FrameClock::new().with_clamps(self.dt_min, self.dt_max)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::unit(),
            dt_min: None,
            dt_max: None,
        }
    }
}
