//! Optional TOML configuration file.
//!
//! ```toml
//! [test]
//! prefix = "zzztest"
//! user = "kjn"
//!
//! [words]
//! batch_size = 500
//! list = "/usr/share/dict/words"
//! ```
//!
//! Every key is optional. Command-line flags (and their environment
//! variables) take precedence over the file.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub test: TestSection,
    pub words: WordsSection,
}

/// Overrides for the names of test objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestSection {
    pub prefix: Option<String>,
    /// Login name the user tag is derived from
    pub user: Option<String>,
}

/// Filler word cache settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsSection {
    pub batch_size: Option<usize>,
    /// Newline-delimited word list; offline pseudo-words when unset
    pub list: Option<PathBuf>,
}

impl FileConfig {
    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {path:?}"))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading configuration from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
