//! Activity log port.

use crate::domain::ActivityEntry;

/// Append-only record of notable user actions.
pub trait ActivityLog: Send + Sync {
    /// Append an entry. Never fails.
    fn add_log(&self, entry: ActivityEntry);

    /// All entries, newest first. Entries with equal timestamps keep a
    /// stable order, most recently appended first.
    fn get_logs(&self) -> Vec<ActivityEntry>;

    /// Drop every entry.
    fn clear_all(&self);
}
