use super::TimerModel;
use crate::util::Clock;

use log::debug;

use std::time::Duration;

/// Decides when the elapsed time display next needs a refresh. Ticks are
/// aligned so the refresh lands right as the elapsed time crosses an interval
/// boundary. Nothing is scheduled while the timer is stopped.
pub struct Ticker {
    interval: Duration,
    ticking: bool,
}

impl Ticker {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(interval: Duration) -> Ticker {
        Ticker {
            interval: interval.max(Duration::from_millis(1)),
            ticking: false,
        }
    }

    pub fn next_tick<C: Clock>(&mut self, model: &TimerModel<C>) -> Option<Duration> {
        if !model.is_running() {
            if self.ticking {
                debug!("Timer no longer running, ticks stopped");
                self.ticking = false;
            }
            return None;
        }

        if !self.ticking {
            debug!("Ticking every {:?}", self.interval);
            self.ticking = true;
        }

        let interval = self.interval.as_nanos();
        let into_interval = model.elapsed().as_nanos() % interval;
        let delay = (interval - into_interval) as u64;
        Some(Duration::from_nanos(delay))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Ticker::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::ManualClock;

    #[test]
    fn test_no_ticks_while_stopped() {
        let clock = ManualClock::new();
        let model = TimerModel::with_clock(clock.clone());
        let mut ticker = Ticker::default();
        assert_eq!(ticker.next_tick(&model), None);
    }

    #[test]
    fn test_aligned_to_second_boundary() {
        let clock = ManualClock::new();
        let mut model = TimerModel::with_clock(clock.clone());
        let mut ticker = Ticker::default();

        model.start();
        assert_eq!(ticker.next_tick(&model), Some(Duration::from_secs(1)));

        clock.advance(Duration::from_millis(2300));
        assert_eq!(ticker.next_tick(&model), Some(Duration::from_millis(700)));

        clock.advance(Duration::from_millis(700));
        assert_eq!(ticker.next_tick(&model), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_alignment_survives_stop_start() {
        let clock = ManualClock::new();
        let mut model = TimerModel::with_clock(clock.clone());
        let mut ticker = Ticker::default();

        model.start();
        clock.advance(Duration::from_millis(400));
        model.stop();
        clock.advance(Duration::from_secs(10));
        model.start();
        assert_eq!(ticker.next_tick(&model), Some(Duration::from_millis(600)));
    }

    #[test]
    fn test_ticks_cease_after_stop() {
        let clock = ManualClock::new();
        let mut model = TimerModel::with_clock(clock.clone());
        let mut ticker = Ticker::default();

        model.start();
        assert!(ticker.next_tick(&model).is_some());
        model.stop();
        assert_eq!(ticker.next_tick(&model), None);
        assert_eq!(ticker.next_tick(&model), None);

        model.start();
        assert!(ticker.next_tick(&model).is_some());
        model.reset();
        assert_eq!(ticker.next_tick(&model), None);
    }

    #[test]
    fn test_custom_interval() {
        let clock = ManualClock::new();
        let mut model = TimerModel::with_clock(clock.clone());
        let mut ticker = Ticker::new(Duration::from_millis(250));

        model.start();
        clock.advance(Duration::from_millis(1100));
        assert_eq!(ticker.next_tick(&model), Some(Duration::from_millis(150)));
    }
}
