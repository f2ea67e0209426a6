// Fixed-step simulation clock
//
// Frames arrive at whatever rate the renderer manages. The simulation always
// advances in whole ticks of `step` seconds, carrying the remainder over to
// the next frame.

/// Converts variable frame time into a count of fixed simulation ticks
#[derive(Debug, Clone)]
pub struct SimClock {
    step: f32,
    accumulator: f32,
    max_ticks_per_frame: u32,
}

impl SimClock {
    /// Default cap on ticks per frame
    pub const MAX_TICKS_PER_FRAME: u32 = 5;

    pub fn new(tick_rate: u32) -> Self {
        SimClock {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_ticks_per_frame: Self::MAX_TICKS_PER_FRAME,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Adds `frame_time` and returns how many ticks to run now
    ///
    /// After a long stall (window drag, breakpoint) at most
    /// `MAX_TICKS_PER_FRAME` ticks run and the backlog is dropped.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        if frame_time.is_finite() && frame_time > 0.0 {
            self.accumulator += frame_time;
        }

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame && self.accumulator >= self.step {
            log::debug!("simulation behind by {:.3}s; dropping backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }
}
