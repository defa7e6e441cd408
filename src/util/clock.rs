use std::time::Instant;

/// Source of the current time for anything that measures elapsed time.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;


#[cfg(test)]
mod test {
    use super::*;

    use std::time::Duration;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();

        clock.advance(Duration::from_secs(3));
        assert_eq!(other.now() - start, Duration::from_secs(3));
    }

    #[test]
    fn test_timer_with_system_clock() {
        let mut timer = crate::app::TimerModel::with_clock(SystemClock);
        timer.start();
        std::thread::sleep(Duration::from_millis(20));
        timer.stop();

        let elapsed = timer.elapsed();
        assert!(elapsed >= Duration::from_millis(20));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(timer.elapsed(), elapsed);
    }
}
