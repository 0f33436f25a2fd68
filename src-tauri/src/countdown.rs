use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::GradebookError;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One countdown update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownTick {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Finished,
}

/// Parse a date (`2026-06-01`) or local date-time (`2026-06-01T09:00`)
/// picked in the exam date field.
pub fn parse_target(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}

/// Time left until `target`, broken into whole units.
pub fn remaining<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> CountdownTick {
    let total = target.clone().signed_duration_since(now.clone()).num_seconds();
    if total <= 0 {
        return CountdownTick::Finished;
    }

    CountdownTick::Running {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    }
}

/// Holds the single active countdown ticker.
#[derive(Default)]
pub struct CountdownTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking towards `target`, replacing any running countdown.
    ///
    /// `on_tick` fires immediately and then once per second until the
    /// target passes. Must be called from within a Tokio runtime.
    pub fn start<F>(&self, target: DateTime<Local>, on_tick: F) -> Result<(), GradebookError>
    where
        F: Fn(CountdownTick) + Send + 'static,
    {
        let mut slot = self.lock()?;
        if let Some(previous) = slot.take() {
            previous.abort();
            debug!("Cancelled previous countdown");
        }

        info!("Starting countdown to {}", target.to_rfc3339());
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                let tick = remaining(&target, &Local::now());
                on_tick(tick);
                if tick == CountdownTick::Finished {
                    info!("Countdown finished");
                    break;
                }
            }
        });

        *slot = Some(handle);
        Ok(())
    }

    /// Cancel the running countdown, if any.
    pub fn stop(&self) -> Result<(), GradebookError> {
        if let Some(handle) = self.lock()?.take() {
            handle.abort();
            info!("Countdown stopped");
        }
        Ok(())
    }

    /// Whether a ticker task is still alive.
    pub fn is_running(&self) -> bool {
        self.lock()
            .map(|slot| slot.as_ref().is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<JoinHandle<()>>>, GradebookError> {
        self.handle
            .lock()
            .map_err(|e| GradebookError::Countdown(format!("Timer lock poisoned: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Timelike, Utc};
    use std::sync::Arc;

    #[test]
    fn test_remaining_breakdown() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
        let target = now + ChronoDuration::seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);

        assert_eq!(
            remaining(&target, &now),
            CountdownTick::Running {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_remaining_finished() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
        assert_eq!(remaining(&now, &now), CountdownTick::Finished);
        assert_eq!(
            remaining(&(now - ChronoDuration::hours(1)), &now),
            CountdownTick::Finished
        );
    }

    #[test]
    fn test_parse_target() {
        let date = parse_target("2026-06-01").unwrap();
        assert_eq!(date.date_naive(), NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        assert_eq!(date.hour(), 0);

        let with_time = parse_target("2026-06-01T09:30").unwrap();
        assert_eq!(with_time.hour(), 9);
        assert_eq!(with_time.minute(), 30);

        assert!(parse_target("").is_none());
        assert!(parse_target("next friday").is_none());
    }

    #[tokio::test]
    async fn test_elapsed_target_finishes_immediately() {
        let timer = CountdownTimer::new();
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let sink = ticks.clone();

        timer
            .start(Local::now() - ChronoDuration::minutes(1), move |tick| {
                sink.lock().unwrap().push(tick)
            })
            .unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*ticks.lock().unwrap(), vec![CountdownTick::Finished]);
        assert!(!timer.is_running());
    }

    #[tokio::test]
    async fn test_restart_replaces_previous_ticker() {
        let timer = CountdownTimer::new();
        let first = Arc::new(Mutex::new(0usize));
        let second = Arc::new(Mutex::new(0usize));

        let first_sink = first.clone();
        timer
            .start(Local::now() + ChronoDuration::days(1), move |_| {
                *first_sink.lock().unwrap() += 1
            })
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second_sink = second.clone();
        timer
            .start(Local::now() + ChronoDuration::days(2), move |_| {
                *second_sink.lock().unwrap() += 1
            })
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1_200)).await;
        assert_eq!(*first.lock().unwrap(), 1, "first ticker kept running");
        assert!(*second.lock().unwrap() >= 2);
        assert!(timer.is_running());

        timer.stop().unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!timer.is_running());
    }
}
