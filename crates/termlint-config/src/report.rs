use std::env;

use serde::{Deserialize, Serialize};

fn default_rule_id() -> String {
    "TL0001".to_string()
}

fn default_category() -> String {
    "Naming".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Rule identifier attached to every diagnostic
    #[serde(default = "default_rule_id")]
    pub rule_id: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Optional link to rule documentation
    #[serde(default)]
    pub help_uri: String,
}

impl ReportConfig {
    pub fn new() -> Self {
        let rule_id = env::var("TERMLINT_RULE_ID").unwrap_or_else(|_| default_rule_id());

        ReportConfig {
            rule_id,
            ..Default::default()
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            rule_id: default_rule_id(),
            category: default_category(),
            help_uri: String::new(),
        }
    }
}
