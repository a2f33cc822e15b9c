use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One catalogue entry. `capacity` is display-only: signups are not
/// rejected when the set reaches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub scheduled_time: String,
    pub capacity: u32,
    pub participants: BTreeSet<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        scheduled_time: impl Into<String>,
        capacity: u32,
        participants: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            description: description.into(),
            scheduled_time: scheduled_time.into(),
            capacity,
            participants: participants.into_iter().map(str::to_string).collect(),
        }
    }
}
