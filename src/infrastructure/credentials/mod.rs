use std::collections::HashMap;

/// Credential key the tool looks up for the OpenAI API key.
pub const API_KEY_CREDENTIAL: &str = "api_key";

/// String-map credential store, normally populated by the plugin host.
///
/// Empty values are treated the same as missing ones by `get`.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding a single `api_key` entry.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.insert(API_KEY_CREDENTIAL, api_key);
        store
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a credential. Empty strings count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Build a store from the environment for running outside a plugin host.
    ///
    /// Reads `OPENAI_API_KEY` (a `.env` file is honored). Returns `None` when
    /// the variable is unset so callers hit the regular credential-validation
    /// path.
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();
        std::env::var("OPENAI_API_KEY").ok().map(Self::with_api_key)
    }
}
