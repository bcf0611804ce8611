use crate::analytics::Analytics;
use crate::models::{DailyStats, SmileLog};
use crate::stats::{daily_stats, DayWindow};
use chrono::{DateTime, Local};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Everything one run of the widget owns: the day window fixed at startup,
/// the counters derived from it, and the full log. Created once in `main`,
/// discarded when the process exits.
#[derive(Debug)]
pub struct Session {
    pub window: DayWindow,
    pub stats: DailyStats,
    pub log: SmileLog,
}

impl Session {
    /// Derives the counters from the log exactly once. Later appends mutate
    /// `stats` directly instead of re-reducing the log.
    pub fn open(log: SmileLog, now: DateTime<Local>) -> Self {
        let window = DayWindow::containing(now);
        let stats = daily_stats(log.entries(), window);
        Self { window, stats, log }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub session: Arc<Mutex<Session>>,
    pub analytics: Analytics,
}

impl AppState {
    pub fn new(data_path: PathBuf, session: Session, analytics: Analytics) -> Self {
        Self {
            data_path,
            session: Arc::new(Mutex::new(session)),
            analytics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SmileEntry;

    #[test]
    fn open_counts_todays_entries_only() {
        let now = Local::now();
        let window = DayWindow::containing(now);
        let mut log = SmileLog::default();
        log.append(SmileEntry {
            smile_back: true,
            timestamp: window.start_ms - 1,
        });
        log.append(SmileEntry {
            smile_back: true,
            timestamp: now.timestamp_millis(),
        });
        log.append(SmileEntry {
            smile_back: false,
            timestamp: now.timestamp_millis(),
        });

        let session = Session::open(log, now);
        assert_eq!(session.stats.total_smiles, 2);
        assert_eq!(session.stats.smiles_back, 1);
        assert_eq!(session.stats.total_new_smiles, 3);
        assert_eq!(session.log.len(), 3);
    }

    #[test]
    fn open_with_stale_log_starts_at_zero() {
        let now = Local::now();
        let window = DayWindow::containing(now);
        let mut log = SmileLog::default();
        for offset in 1..=3 {
            log.append(SmileEntry {
                smile_back: true,
                timestamp: window.start_ms - offset * 3_600_000,
            });
        }

        let session = Session::open(log, now);
        assert_eq!(session.stats, DailyStats::default());
    }
}
