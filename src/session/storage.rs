use std::collections::HashMap;

/// Storage key for the login session flag.
pub const SESSION_KEY: &str = "agentdesk_session";
/// Storage key for the user's saved API key.
pub const API_KEY_KEY: &str = "agentdesk_api_key";
/// Storage key for the daily usage record.
pub const USAGE_KEY: &str = "agentdesk_usage";

/// String key/value storage behind the session component. The browser
/// client backs this with web storage; tests and the terminal client
/// use the in-memory implementation.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
