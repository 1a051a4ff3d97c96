//! Pomodoro countdown

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::debug;

/// Events emitted while a countdown runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: Duration },
    Finished,
}

/// A fixed-length countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self { total }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes) * 60))
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn remaining_after(&self, elapsed: Duration) -> Duration {
        self.total.saturating_sub(elapsed)
    }

    pub fn is_done_after(&self, elapsed: Duration) -> bool {
        elapsed >= self.total
    }
}

/// `MM:SS` from whole seconds; partial seconds are dropped
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Run `countdown`, reporting every `tick` until it ends
///
/// Emits a `Tick` with the remaining time on each interval while time is
/// left, then exactly one `Finished`.
pub async fn run_countdown<F>(countdown: Countdown, tick: Duration, mut on_event: F)
where
    F: FnMut(TimerEvent),
{
    debug!(total = ?countdown.total(), ?tick, "run_countdown: called");
    let started = Instant::now();
    let mut ticker = interval(tick.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let elapsed = started.elapsed();
        if countdown.is_done_after(elapsed) {
            break;
        }
        on_event(TimerEvent::Tick {
            remaining: countdown.remaining_after(elapsed),
        });
    }

    debug!("run_countdown: finished");
    on_event(TimerEvent::Finished);
}
