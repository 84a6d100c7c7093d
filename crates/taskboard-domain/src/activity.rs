use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded event. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    id: String,
    description: String,
    timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(id: String, description: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only record of activities in insertion order. Entries constructed
/// with out-of-order timestamps are kept as appended; readers wanting time
/// order sort for themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    activities: Vec<Activity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// The most recently appended activity.
    pub fn last(&self) -> Option<&Activity> {
        self.activities.last()
    }

    pub fn clear(&mut self) {
        self.activities.clear();
    }
}
