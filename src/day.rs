//! Day counter and the between-waves countdown
//!
//! Once a wave is cleared the world calls `begin_countdown`. The next day
//! starts either when the player confirms or when `tick` reports that the
//! countdown ran out; both paths end in `advance`.

#[derive(Debug, Clone)]
pub struct DayCounter {
    day: u32,
    duration: f32,
    remaining: Option<f32>,
}

impl DayCounter {
    /// Starts on day 1 with no countdown running
    pub fn new(duration: f32) -> Self {
        DayCounter {
            day: 1,
            duration: duration.max(0.0),
            remaining: None,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_countdown_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left on the countdown, if one is running
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Starts the countdown; returns false if it was already running
    pub fn begin_countdown(&mut self) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(self.duration);
        true
    }

    /// Runs the countdown down by `dt`; true once it has expired
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining.as_mut() {
            Some(remaining) => {
                *remaining = (*remaining - dt).max(0.0);
                *remaining <= 0.0
            }
            None => false,
        }
    }

    /// Moves to the next day and clears the countdown
    pub fn advance(&mut self) -> u32 {
        self.day = self.day.saturating_add(1);
        self.remaining = None;
        self.day
    }

    /// Whole seconds left, rounded up, as `m:ss`
    pub fn countdown_display(&self) -> Option<String> {
        self.remaining.map(|remaining| {
            let secs = remaining.ceil() as u32;
            format!("{}:{:02}", secs / 60, secs % 60)
        })
    }
}

/// Zombies in the wave for `day`
pub fn wave_size(wave_base: u32, day: u32) -> u32 {
    wave_base.saturating_mul(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_day_one() {
        let counter = DayCounter::new(90.0);
        assert_eq!(counter.day(), 1);
        assert!(!counter.is_countdown_active());
        assert_eq!(counter.countdown_display(), None);
    }

    #[test]
    fn test_countdown_expires_after_duration() {
        let mut counter = DayCounter::new(90.0);
        assert!(counter.begin_countdown());
        assert!(!counter.begin_countdown());

        assert!(!counter.tick(89.0));
        assert_eq!(counter.countdown_display().as_deref(), Some("0:01"));
        assert!(counter.tick(1.5));
        assert_eq!(counter.remaining(), Some(0.0));
    }

    #[test]
    fn test_tick_without_countdown_does_nothing() {
        let mut counter = DayCounter::new(90.0);
        assert!(!counter.tick(1000.0));
        assert_eq!(counter.day(), 1);
    }

    #[test]
    fn test_advance_clears_countdown() {
        let mut counter = DayCounter::new(90.0);
        counter.begin_countdown();
        assert_eq!(counter.advance(), 2);
        assert!(!counter.is_countdown_active());
    }

    #[test]
    fn test_display_format() {
        let mut counter = DayCounter::new(90.0);
        counter.begin_countdown();
        assert_eq!(counter.countdown_display().as_deref(), Some("1:30"));
        counter.tick(0.5);
        assert_eq!(counter.countdown_display().as_deref(), Some("1:30"));
        counter.tick(30.0);
        assert_eq!(counter.countdown_display().as_deref(), Some("1:00"));
    }

    #[test]
    fn test_wave_size() {
        assert_eq!(wave_size(5, 1), 5);
        assert_eq!(wave_size(5, 3), 15);
        assert_eq!(wave_size(u32::MAX, 2), u32::MAX);
    }
}
