use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use termlint_config::Config;
use termlint_core::dictionary::{TermDictionary, TermDictionaryLoader};
use termlint_dictionary::TermFileLoader;
use tokio::sync::RwLock;

/// Running totals for one analysis run.
#[derive(Debug, Default)]
pub struct AnalysisStatus {
    pub symbols_checked: AtomicU64,
    pub symbols_flagged: AtomicU64,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Immutable dictionary snapshot shared by every check in this run
    pub dictionary: Arc<TermDictionary>,
    pub status: AnalysisStatus,
    pub channel_capacity: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = load_dictionary(&config);
        Self::with_dictionary(config, dictionary)
    }

    pub fn with_dictionary(config: Config, dictionary: TermDictionary) -> Self {
        let channel_capacity = config.channel_capacity;

        Self {
            config: Arc::new(RwLock::new(config)),
            dictionary: Arc::new(dictionary),
            status: AnalysisStatus::default(),
            channel_capacity,
        }
    }
}

/// Resolve the dictionary snapshot for this run.
///
/// Every failure path degrades to an empty dictionary: a run without terms
/// yields no diagnostics instead of blocking unrelated work.
fn load_dictionary(config: &Config) -> TermDictionary {
    if !config.dictionary.enabled {
        tracing::warn!("Dictionary disabled, screening nothing");
        return TermDictionary::default();
    }

    if let Some(path) = &config.dictionary.path {
        match TermFileLoader.load_from_file(Path::new(path)) {
            Ok(dictionary) => return dictionary,
            Err(e) => {
                tracing::error!("Failed to load term dictionary from {}: {}", path, e);
                if !config.dictionary.use_embedded {
                    tracing::warn!("Continuing with an empty dictionary");
                    return TermDictionary::default();
                }
                tracing::warn!("Falling back to the embedded dictionary");
            }
        }
    }

    if config.dictionary.use_embedded {
        TermFileLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            TermDictionary::default()
        })
    } else {
        tracing::warn!("No dictionary source configured, screening nothing");
        TermDictionary::default()
    }
}
