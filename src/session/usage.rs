use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStorage, USAGE_KEY};

/// Per-agent daily submission cap. Advisory and enforced client-side
/// only; the proxy does not re-check it.
pub const DAILY_LIMIT: u32 = 200;

/// Usage counters for one calendar day, keyed by the UTC date string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UsageRecord {
    pub date: String,
    pub counts: HashMap<String, u32>,
}

impl UsageRecord {
    fn empty(date: &str) -> Self {
        Self {
            date: date.to_string(),
            counts: HashMap::new(),
        }
    }

    pub fn count(&self, agent_id: &str) -> u32 {
        self.counts.get(agent_id).copied().unwrap_or(0)
    }
}

/// Today's UTC date string, the key the usage record is scoped to.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Read the current usage record. A record stored under a different
/// date is stale and replaced with a zeroed record for today; the
/// reset is not persisted until the next increment.
pub fn get_usage(storage: &dyn KeyValueStorage) -> UsageRecord {
    let today = today();
    storage
        .get(USAGE_KEY)
        .and_then(|raw| serde_json::from_str::<UsageRecord>(&raw).ok())
        .filter(|record| record.date == today)
        .unwrap_or_else(|| UsageRecord::empty(&today))
}

/// Increment the named agent's counter by one and persist the record.
pub fn increment_usage(storage: &mut dyn KeyValueStorage, agent_id: &str) -> UsageRecord {
    let mut record = get_usage(storage);
    *record.counts.entry(agent_id.to_string()).or_insert(0) += 1;
    let raw = serde_json::to_string(&record).expect("Unable to serialize usage record");
    storage.set(USAGE_KEY, &raw);
    record
}

/// Submissions left for the agent today, saturating at zero.
pub fn remaining(storage: &dyn KeyValueStorage, agent_id: &str, limit: u32) -> u32 {
    limit.saturating_sub(get_usage(storage).count(agent_id))
}
