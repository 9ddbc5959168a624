use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::report::ReportConfig;

pub mod dictionary;
pub mod report;

fn default_channel_capacity() -> usize {
    256
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub report: ReportConfig,
    /// Bounded capacity of the intake and report channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("TERMLINT_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_channel_capacity);

        Config {
            dictionary: DictionaryConfig::new(),
            report: ReportConfig::new(),
            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary: DictionaryConfig::default(),
            report: ReportConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_out_of_the_box() {
        let config = Config::default();

        assert!(config.dictionary.enabled);
        assert!(config.dictionary.use_embedded);
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.report.rule_id, "TL0001");
        assert_eq!(config.report.category, "Naming");
        assert_eq!(config.channel_capacity, 256);
    }
}
