use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_use_embedded() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Path to a terms file; None means the embedded dictionary
    #[serde(default)]
    pub path: Option<String>,
    /// Fall back to the embedded dictionary when no path is given or the
    /// configured file fails to load
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("TERMLINT_DICTIONARY").ok();

        DictionaryConfig {
            path,
            ..Default::default()
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
            use_embedded: default_use_embedded(),
        }
    }
}
