use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use kalimat_lib::config::Config;
use kalimat_lib::progress::{Progress, ProgressStorage};
use kalimat_lib::sink::HandoffOptions;
use kalimat_lib::vocabulary::Corpus;

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub corpus_path: PathBuf,
    pub progress: ProgressStorage,
}

impl App {
    /// Load the config file and apply command-line overrides
    pub fn new(config_path: Option<&Path>, corpus: Option<PathBuf>, seen: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::default_path().context("Failed to get config directory")?,
        };
        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let corpus_path = match corpus {
            Some(path) => path,
            None => config.corpus_path().context("Failed to resolve corpus path")?,
        };
        let seen_path = match seen {
            Some(path) => path,
            None => config.seen_path().context("Failed to resolve progress path")?,
        };

        Ok(Self {
            config,
            corpus_path,
            progress: ProgressStorage::new(seen_path),
        })
    }

    pub fn load_corpus(&self) -> Result<Corpus> {
        Corpus::load(&self.corpus_path)
            .with_context(|| format!("Failed to load vocabulary from {}", self.corpus_path.display()))
    }

    pub fn load_progress(&self) -> Result<Progress> {
        self.progress.load()
            .with_context(|| format!("Failed to load progress from {}", self.progress.path().display()))
    }

    /// Requested count, or the configured words per day
    pub fn count(&self, count: Option<i64>) -> i64 {
        count.unwrap_or_else(|| i64::from(self.config.words_per_day))
    }

    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn handoff_options(&self) -> HandoffOptions {
        HandoffOptions {
            deck_name: self.config.deck_name.clone(),
            tags: self.config.tags.clone(),
            audio_dir: self.config.audio_dir.clone(),
        }
    }
}
