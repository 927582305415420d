//! bcdc-apitests library
//!
//! Generates test datasets for the BC Data Catalogue (a CKAN instance using
//! ckanext-scheming) from the catalog's own dataset schema.
//!
//! # Crates
//!
//! - `scheming_core` - the schema field model
//! - `dataset_generator` - record population from that model
//!
//! # CLI Usage
//!
//! ```bash
//! # One dataset with two resources, as a package_create payload
//! bcdc-apitests populate --schema bcdc_dataset.json --resources 2
//!
//! # Presets used by the schema, and whether they are all supported
//! bcdc-apitests presets --schema bcdc_dataset.json
//! bcdc-apitests check --schema bcdc_dataset.json
//!
//! # Required dataset fields
//! bcdc-apitests fields --schema bcdc_dataset.json --required
//! ```

use clap::Args;
use dataset_generator::{TestValues, DEFAULT_TEST_PREFIX, DEFAULT_WORD_BATCH_SIZE};
use std::path::PathBuf;

pub mod config;
pub mod scheming;
pub mod testing;

use config::FileConfig;

/// Names given to the test objects.
#[derive(Args, Clone, Debug, Default)]
pub struct TestOpts {
    /// Prefix of every test object name (default: zzztest)
    #[arg(long, env = "BCDC_TEST_PREFIX")]
    pub test_prefix: Option<String>,

    /// Login name the user tag is derived from (default: $USER)
    #[arg(long, env = "BCDC_TEST_USER")]
    pub test_user: Option<String>,
}

impl TestOpts {
    /// Flags first, then the config file, then the built-in defaults.
    pub fn resolve(&self, config: &FileConfig) -> TestValues {
        let prefix = self
            .test_prefix
            .as_deref()
            .or(config.test.prefix.as_deref())
            .unwrap_or(DEFAULT_TEST_PREFIX);
        match self.test_user.as_deref().or(config.test.user.as_deref()) {
            Some(user) => TestValues::new(prefix, user),
            None => TestValues::for_current_user(prefix),
        }
    }
}

/// Filler word cache options.
#[derive(Args, Clone, Debug, Default)]
pub struct WordOpts {
    /// Number of words fetched per cache refill (default: 500)
    #[arg(long)]
    pub word_batch_size: Option<usize>,

    /// Newline-delimited word list to draw filler words from
    #[arg(long, value_name = "PATH")]
    pub word_list: Option<PathBuf>,
}

impl WordOpts {
    pub fn batch_size(&self, config: &FileConfig) -> usize {
        self.word_batch_size
            .or(config.words.batch_size)
            .unwrap_or(DEFAULT_WORD_BATCH_SIZE)
    }

    pub fn word_list(&self, config: &FileConfig) -> Option<PathBuf> {
        self.word_list.clone().or_else(|| config.words.list.clone())
    }
}

/// Arguments shared by every command.
#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    /// Scheming schema file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// TOML configuration file
    #[arg(long, env = "BCDC_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    pub fn load_config(&self) -> anyhow::Result<FileConfig> {
        FileConfig::load(self.config.as_deref())
    }
}
