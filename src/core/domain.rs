use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayNotifierVia;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    // storage assigned id, zero until the object has been stored
    fn id(&self) -> i64;
}

pub const DEFAULT_MAX_FIELD_LEN: usize = 100;

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub branch_id: String,
    pub notifier: GatewayNotifierVia,
    pub max_title_len: usize,
    pub max_author_len: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            notifier: GatewayNotifierVia::Console,
            max_title_len: DEFAULT_MAX_FIELD_LEN,
            max_author_len: DEFAULT_MAX_FIELD_LEN,
        }
    }

    // loads configuration from a json file, absent keys keep their defaults
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(content.as_str())
    }

    pub fn parse(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        if config.max_title_len == 0 || config.max_author_len == 0 {
            return Err(LibraryError::validation(
                format!("field length limits must be positive, got title={} author={}",
                        config.max_title_len, config.max_author_len).as_str(), None));
        }
        Ok(config)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}
