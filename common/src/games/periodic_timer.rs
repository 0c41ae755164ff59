use std::time::{Duration, Instant};

/// Frame-polled timer. Fires at most once per `poll`, so a slow frame delays
/// the next step instead of queueing a burst of them.
#[derive(Clone, Debug)]
pub struct PeriodicTimer {
    interval: Duration,
    last_fired: Instant,
}

impl PeriodicTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fired: now,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_fired = now;
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            return true;
        }
        false
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let start = Instant::now();
        let mut timer = PeriodicTimer::new(Duration::from_millis(100), start);
        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_fires_once_after_long_gap() {
        let start = Instant::now();
        let mut timer = PeriodicTimer::new(Duration::from_millis(50), start);
        assert!(timer.poll(start + Duration::from_millis(500)));
        assert!(!timer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_reset_restarts_countdown() {
        let start = Instant::now();
        let mut timer = PeriodicTimer::new(Duration::from_millis(100), start);
        timer.reset(start + Duration::from_millis(90));
        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(190)));
    }

    #[test]
    fn test_time_until_due() {
        let start = Instant::now();
        let mut timer = PeriodicTimer::new(Duration::from_millis(100), start);
        assert_eq!(timer.time_until_due(start + Duration::from_millis(30)), Duration::from_millis(70));
        timer.set_interval(Duration::from_millis(20));
        assert_eq!(timer.time_until_due(start + Duration::from_millis(30)), Duration::ZERO);
    }
}
