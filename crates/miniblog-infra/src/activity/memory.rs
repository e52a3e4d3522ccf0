//! In-memory activity log.

use parking_lot::Mutex;

use miniblog_core::domain::ActivityEntry;
use miniblog_core::ports::ActivityLog;

/// Activity log kept in a `Vec` behind its own mutex.
///
/// Note: Entries are lost on process restart.
pub struct InMemoryActivityLog {
    entries: Mutex<Vec<ActivityEntry>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for InMemoryActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityLog for InMemoryActivityLog {
    fn add_log(&self, entry: ActivityEntry) {
        tracing::debug!(
            user = %entry.username,
            kind = entry.kind(),
            "Activity recorded"
        );
        self.entries.lock().push(entry);
    }

    fn get_logs(&self) -> Vec<ActivityEntry> {
        // Reverse first so the stable sort leaves later appends ahead on ties
        let mut logs: Vec<ActivityEntry> = self.entries.lock().iter().rev().cloned().collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs
    }

    fn clear_all(&self) {
        let mut entries = self.entries.lock();
        let cleared = entries.len();
        entries.clear();
        tracing::info!(cleared, "Activity log cleared");
    }
}
