mod ticker;

pub use ticker::Ticker;

use crate::util::{format_elapsed, Clock, SystemClock};

use log::{debug, info};

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running { started_at: Instant },
}

/// Cumulative stopwatch. Time spent stopped does not count, time from every
/// run segment since the last reset does.
pub struct TimerModel<C = SystemClock> {
    clock: C,
    state: TimerState,
    accumulated: Duration,
}

impl TimerModel<SystemClock> {
    pub fn new() -> TimerModel<SystemClock> {
        TimerModel::with_clock(SystemClock)
    }
}

impl Default for TimerModel<SystemClock> {
    fn default() -> Self {
        TimerModel::new()
    }
}

impl<C: Clock> TimerModel<C> {
    pub fn with_clock(clock: C) -> TimerModel<C> {
        TimerModel {
            clock,
            state: TimerState::Stopped,
            accumulated: Duration::ZERO,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn start(&mut self) {
        if self.is_running() {
            debug!("Start requested while already running");
            return;
        }

        self.state = TimerState::Running {
            started_at: self.clock.now(),
        };
        info!("Timer started at {}", format_elapsed(self.accumulated));
    }

    pub fn stop(&mut self) {
        let started_at = match self.state {
            TimerState::Running { started_at } => started_at,
            TimerState::Stopped => {
                debug!("Stop requested while already stopped");
                return;
            }
        };

        self.accumulated += self.clock.now().saturating_duration_since(started_at);
        self.state = TimerState::Stopped;
        info!("Timer stopped at {}", format_elapsed(self.accumulated));
    }

    pub fn reset(&mut self) {
        self.state = TimerState::Stopped;
        self.accumulated = Duration::ZERO;
        info!("Timer reset");
    }

    pub fn elapsed(&self) -> Duration {
        match self.state {
            TimerState::Stopped => self.accumulated,
            TimerState::Running { started_at } => {
                self.accumulated + self.clock.now().saturating_duration_since(started_at)
            }
        }
    }
}
