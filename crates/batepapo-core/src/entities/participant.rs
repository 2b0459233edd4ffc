//! Participant entity - an active member of the room

use chrono::{DateTime, Utc};

/// Participant entity
///
/// The name is the unique key among currently active participants.
/// `last_seen` is refreshed on every heartbeat and decides staleness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub last_seen: DateTime<Utc>,
}

impl Participant {
    /// Create a new Participant seen right now
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_at(name, Utc::now())
    }

    /// Create a new Participant with an explicit last-seen timestamp
    pub fn new_at(name: impl Into<String>, last_seen: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_seen,
        }
    }

    /// Refresh the last-seen timestamp (heartbeat)
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_seen = at;
    }

    /// Check if this participant is stale relative to a cutoff
    #[inline]
    pub fn is_stale(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen < cutoff
    }
}
