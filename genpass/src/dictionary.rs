use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// System word list, present on most unix installs.
pub const PRIMARY_DICTIONARY: &str = "/usr/share/dict/words";
/// Read from the working directory when the system list is missing.
pub const FALLBACK_DICTIONARY: &str = "wordlist.txt";

/// Marks a possessive entry ("dog's"); everything from here on is dropped.
pub const POSSESSIVE: &str = "'s";

/// Where to look for the word list: a primary path and one fallback.
#[derive(Debug, Clone)]
pub struct DictionarySource {
    primary: PathBuf,
    fallback: PathBuf,
}

impl DictionarySource {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        DictionarySource {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub fn system() -> Self {
        Self::new(PRIMARY_DICTIONARY, FALLBACK_DICTIONARY)
    }

    /// Reads the primary list, or the fallback if that fails for any reason.
    pub fn load(&self) -> Result<Dictionary> {
        let (path, text) = match fs::read_to_string(&self.primary) {
            Ok(text) => (&self.primary, text),
            Err(e) => {
                info!(
                    "cannot read {:?} ({}), trying {:?}",
                    self.primary, e, self.fallback
                );
                let text = fs::read_to_string(&self.fallback).map_err(|source| {
                    Error::DictionaryUnavailable {
                        primary: self.primary.clone(),
                        fallback: self.fallback.clone(),
                        source,
                    }
                })?;
                (&self.fallback, text)
            }
        };
        let dictionary = Dictionary::from_text(&text);
        if dictionary.is_empty() {
            return Err(Error::EmptyDictionary { path: path.clone() });
        }
        debug!("loaded {} words from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }
}

/// Ordered, immutable list of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// One word per line. Blank lines, and entries that are nothing but a
    /// possessive suffix, are skipped so every stored word yields text.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !strip_possessive(w).is_empty())
            .map(str::to_owned)
            .collect();
        Dictionary { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w: S| w.into().trim().to_owned())
            .filter(|w| !strip_possessive(w).is_empty())
            .collect();
        Dictionary { words }
    }
}

/// Keeps only the text before the first possessive marker.
pub fn strip_possessive(word: &str) -> &str {
    word.split(POSSESSIVE).next().unwrap_or(word)
}
