use crate::models::{DailyStats, SmileEntry};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Milliseconds from local midnight to the last millisecond of the same day.
const DAY_SPAN_MS: i64 = 24 * 60 * 60 * 1000 - 1;

/// One local calendar day as an inclusive range of epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayWindow {
    /// The window that contains `now`, anchored at local wall-clock midnight.
    pub fn containing(now: DateTime<Local>) -> Self {
        let date = now.date_naive();
        let midnight = date.and_time(NaiveTime::MIN);
        // Midnight can be skipped by a DST jump; the current instant is
        // still a valid lower bound for the rest of the day.
        let start = Local
            .from_local_datetime(&midnight)
            .earliest()
            .unwrap_or(now);
        let start_ms = start.timestamp_millis();
        Self {
            date,
            start_ms,
            end_ms: start_ms + DAY_SPAN_MS,
        }
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }

    /// Date label shown in the UI and API responses, `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date.to_string()
    }
}

/// One-shot reduction of the full log to the counters for `window`.
/// Runs once at startup; later appends mutate the counters directly.
pub fn daily_stats(entries: &[SmileEntry], window: DayWindow) -> DailyStats {
    let mut stats = DailyStats::default();
    for entry in entries.iter().filter(|entry| window.contains(entry.timestamp)) {
        stats.record(entry.smile_back);
    }
    stats
}
