//! Filler words for free-text fields.
//!
//! Word sources can be slow (the usual one is a remote word generator), so
//! [`RandomWords`] asks its source for a whole batch at once and hands the
//! words out one by one, fetching the next batch only when the cache runs dry.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of words fetched per refill unless configured otherwise.
pub const DEFAULT_WORD_BATCH_SIZE: usize = 500;

/// Errors raised by word sources.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    /// Reading a word list failed
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list has no usable entries
    #[error("Word list {0} contains no words")]
    EmptyWordList(PathBuf),

    /// A refill produced nothing
    #[error("Word source returned no words for a batch of {requested}")]
    EmptyBatch { requested: usize },

    /// Any other failure of an external source
    #[error("Word source failed: {0}")]
    Source(String),
}

/// External provider of filler words.
pub trait WordSource {
    /// Return up to `count` words. Called once per cache refill.
    fn fetch(&mut self, count: usize) -> Result<Vec<String>, WordSourceError>;
}

impl<F> WordSource for F
where
    F: FnMut(usize) -> Result<Vec<String>, WordSourceError>,
{
    fn fetch(&mut self, count: usize) -> Result<Vec<String>, WordSourceError> {
        self(count)
    }
}

/// Batched cache in front of a [`WordSource`].
///
/// Each populator owns one; nested populations share it through the
/// populator. No ordering or uniqueness guarantee on the words handed out.
pub struct RandomWords {
    source: Box<dyn WordSource>,
    batch_size: usize,
    cache: Vec<String>,
    refills: u64,
}

impl RandomWords {
    /// Create a cache refilled `batch_size` words at a time (at least 1).
    pub fn new(source: impl WordSource + 'static, batch_size: usize) -> Self {
        Self {
            source: Box::new(source),
            batch_size: batch_size.max(1),
            cache: Vec::new(),
            refills: 0,
        }
    }

    /// Create a cache using [`DEFAULT_WORD_BATCH_SIZE`].
    pub fn with_default_batch(source: impl WordSource + 'static) -> Self {
        Self::new(source, DEFAULT_WORD_BATCH_SIZE)
    }

    /// Take one word out of the cache, refilling it first when empty.
    ///
    /// Source failures are returned as is; nothing is retried.
    pub fn next_word(&mut self) -> Result<String, WordSourceError> {
        if self.cache.is_empty() {
            self.refill()?;
        }
        self.cache.pop().ok_or(WordSourceError::EmptyBatch {
            requested: self.batch_size,
        })
    }

    fn refill(&mut self) -> Result<(), WordSourceError> {
        info!("Getting another {} random words from the word source", self.batch_size);
        let words = self.source.fetch(self.batch_size)?;
        if words.is_empty() {
            return Err(WordSourceError::EmptyBatch {
                requested: self.batch_size,
            });
        }
        self.refills += 1;
        debug!("Word cache refilled with {} words", words.len());
        self.cache = words;
        Ok(())
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Words currently waiting in the cache.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Number of successful refills so far.
    pub fn refill_count(&self) -> u64 {
        self.refills
    }
}

impl std::fmt::Debug for RandomWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomWords")
            .field("batch_size", &self.batch_size)
            .field("cached", &self.cache.len())
            .field("refills", &self.refills)
            .finish()
    }
}

// ============================================================================
// Built-in sources
// ============================================================================

const ONSETS: &[&str] = &[
    "b", "br", "c", "ch", "d", "dr", "f", "g", "gr", "h", "j", "k", "l", "m", "n", "p", "pl",
    "r", "s", "st", "t", "tr", "v", "w", "z",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ai", "ea", "io", "ou"];
const CODAS: &[&str] = &["", "", "", "n", "r", "s", "t", "l", "m", "ck"];

/// Offline source producing pronounceable pseudo-words.
///
/// Words are lowercase ASCII letters only, so they are safe inside URLs and
/// package slugs.
#[derive(Debug, Clone)]
pub struct SyllableWords {
    rng: StdRng,
}

impl SyllableWords {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn word(&mut self) -> String {
        let syllables = self.rng.gen_range(2..=3);
        let mut word = String::new();
        for _ in 0..syllables {
            word.push_str(ONSETS[self.rng.gen_range(0..ONSETS.len())]);
            word.push_str(VOWELS[self.rng.gen_range(0..VOWELS.len())]);
        }
        word.push_str(CODAS[self.rng.gen_range(0..CODAS.len())]);
        word
    }
}

impl WordSource for SyllableWords {
    fn fetch(&mut self, count: usize) -> Result<Vec<String>, WordSourceError> {
        Ok((0..count).map(|_| self.word()).collect())
    }
}

/// Source sampling words (with replacement) from a newline-delimited file.
///
/// Blank lines and lines starting with `#` are ignored.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
    words: Vec<String>,
    rng: StdRng,
}

impl WordListFile {
    pub fn open<P: AsRef<Path>>(path: P, seed: u64) -> Result<Self, WordSourceError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| WordSourceError::Io {
            path: path.clone(),
            source,
        })?;

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(WordSourceError::EmptyWordList(path));
        }

        debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self {
            path,
            words,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordListFile {
    fn fetch(&mut self, count: usize) -> Result<Vec<String>, WordSourceError> {
        Ok((0..count)
            .filter_map(|_| self.words.choose(&mut self.rng).cloned())
            .collect())
    }
}
