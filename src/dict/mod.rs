//! Phrase dictionary for polyphone disambiguation.
//!
//! Maps a toneless pinyin reading to the words in which that reading is the
//! correct one (e.g. `zhang → [长大, 校长, ...]`). Built once from a
//! line-oriented text resource and immutable afterwards; the embedded default
//! dictionary is exposed as a lazy process-wide singleton via [`default_dict`].


use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, error, warn};

/// Embedded default polyphone dictionary, `reading:word1 word2 ...` per line.
pub const DEFAULT_DICT: &str = include_str!("default_dict.txt");

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Immutable reading → words mapping.
///
/// Readings are canonical pinyin syllables: lowercase, no tone marks, `v` in
/// place of `ü`. Word lists keep their source order and are never empty.
#[derive(Debug, Default)]
pub struct PhraseDict {
    entries: HashMap<String, Vec<String>>,
}

impl PhraseDict {
    /// Parse dictionary text. Blank lines and lines starting with `#` are
    /// ignored. A malformed line (no `reading:words` shape) is skipped with a
    /// warning rather than failing the whole load.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((reading, words)) = line.split_once(':') else {
                warn!(lineno = lineno + 1, "dictionary line has no ':', skipped");
                continue;
            };
            let reading = reading.trim();
            let words: Vec<String> = words.split_whitespace().map(String::from).collect();
            if reading.is_empty() || words.is_empty() {
                warn!(
                    lineno = lineno + 1,
                    "dictionary line missing reading or words, skipped"
                );
                continue;
            }
            entries.insert(reading.to_string(), words);
        }
        debug!(readings = entries.len(), "phrase dictionary loaded");
        Self { entries }
    }

    /// Load a dictionary file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Load a dictionary file, degrading to an empty dictionary on failure.
    ///
    /// An empty dictionary disables disambiguation (the first candidate
    /// reading always wins) but keeps transliteration working.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(dict) => dict,
            Err(e) => {
                error!(
                    path = %path.as_ref().display(),
                    "failed to load phrase dictionary, disambiguation disabled: {e}"
                );
                Self::default()
            }
        }
    }

    /// Words for which `reading` is the correct disambiguation, in source
    /// order. Empty slice for unknown readings.
    pub fn lookup(&self, reading: &str) -> &[String] {
        self.entries
            .get(reading)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The embedded default dictionary, parsed once on first access.
pub fn default_dict() -> &'static PhraseDict {
    static INSTANCE: OnceLock<PhraseDict> = OnceLock::new();
    INSTANCE.get_or_init(|| PhraseDict::parse(DEFAULT_DICT))
}
