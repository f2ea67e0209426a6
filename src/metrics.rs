//! HUD meters: damage per second, shots per second, movement speed
//!
//! The meters are sampled, not continuous. A `RateMeter` publishes a new value
//! only when its window closes, so the number on screen is steady enough to
//! read.

use std::collections::VecDeque;

/// Sums events over a fixed window and reports them per second
#[derive(Debug, Clone)]
pub struct RateMeter {
    window: f32,
    accumulated: f32,
    elapsed: f32,
    rate: f32,
}

impl RateMeter {
    pub fn new(window: f32) -> Self {
        RateMeter {
            window: window.max(f32::EPSILON),
            accumulated: 0.0,
            elapsed: 0.0,
            rate: 0.0,
        }
    }

    pub fn record(&mut self, amount: f32) {
        self.accumulated += amount;
    }

    /// Advances the window; publishes and restarts once it is full
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.window {
            self.rate = self.accumulated / self.elapsed;
            self.accumulated = 0.0;
            self.elapsed = 0.0;
        }
    }

    /// Last published value, per second
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

/// Rolling average of the last few per-tick speeds
#[derive(Debug, Clone)]
pub struct SpeedMeter {
    samples: VecDeque<f32>,
    capacity: usize,
    floor: f32,
}

impl SpeedMeter {
    pub fn new(capacity: usize, floor: f32) -> Self {
        let capacity = capacity.max(1);
        SpeedMeter {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            floor,
        }
    }

    pub fn push(&mut self, speed: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(speed);
    }

    /// Average speed in units per second; tiny values read as zero
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let avg = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        if avg < self.floor { 0.0 } else { avg }
    }
}
