use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single depth observation, produced once per sampling iteration.
/// The sampler hands it to the store and keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSample {
    /// e.g. "jobs:pending"
    pub queue_name: String,
    /// UTC wall-clock time taken right before the sample is saved
    pub observed_at: DateTime<Utc>,
    /// Pending item count as reported by the backing queue
    pub depth: i64,
}

impl DepthSample {
    /// Stamp `depth` with the current UTC time.
    pub fn now(queue_name: &str, depth: i64) -> Self {
        Self {
            queue_name: queue_name.to_owned(),
            observed_at: Utc::now(),
            depth,
        }
    }
}
