use serde::{Deserialize, Serialize};

/// One recorded smiling interaction. Immutable once created.
///
/// Serialized with camelCase field names to stay compatible with the
/// historical on-disk log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmileEntry {
    pub smile_back: bool,
    /// Milliseconds since epoch, assigned at record-creation time.
    pub timestamp: i64,
}

/// Append-only ordered sequence of interactions, persisted as a bare JSON
/// array. Records are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SmileLog {
    entries: Vec<SmileEntry>,
}

impl SmileLog {
    pub fn append(&mut self, entry: SmileEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SmileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Today's derived counters. Never persisted; rebuilt from the log at
/// startup and mutated in memory afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct DailyStats {
    pub total_smiles: u64,
    pub smiles_back: u64,
    pub total_new_smiles: u64,
}

impl DailyStats {
    /// The other person smiled back: one smile given, one received.
    pub fn record_smile_back(&mut self) {
        self.total_smiles = self.total_smiles.saturating_add(1);
        self.smiles_back = self.smiles_back.saturating_add(1);
        self.total_new_smiles = self.total_new_smiles.saturating_add(2);
    }

    /// No smile back: only the smile given counts.
    pub fn record_no_smile_back(&mut self) {
        self.total_smiles = self.total_smiles.saturating_add(1);
        self.total_new_smiles = self.total_new_smiles.saturating_add(1);
    }

    pub fn record(&mut self, smile_back: bool) {
        if smile_back {
            self.record_smile_back();
        } else {
            self.record_no_smile_back();
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SmileRequest {
    pub action: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyStatsResponse {
    pub date: String,
    pub total_smiles: u64,
    pub smiles_back: u64,
    pub total_new_smiles: u64,
}
