use std::{fs, path::Path};

use rand::Rng;
use tracing::{debug, warn};

use crate::{Error, Result};

const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

/// A non-empty, ordered list of upper-case candidate words.
///
/// Every word is trimmed and upper-cased on the way in. Anything that is not
/// then made up entirely of `A-Z` is dropped, since a round built on it could
/// never be solved through [`Hangman::is_valid_letter`](crate::Hangman::is_valid_letter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<_> = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();

        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Parses one word per line; blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.lines().filter(|line| !line.trim().is_empty()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ReadWordList {
            path: path.to_owned(),
            source,
        })?;

        let list = Self::parse(&text)?;
        debug!(path = %path.display(), count = list.len(), "loaded word list");
        Ok(list)
    }

    /// The dictionary bundled with the library.
    pub fn embedded() -> Self {
        let words: Vec<_> = EMBEDDED_WORDS.lines().filter_map(normalize).collect();
        debug_assert!(!words.is_empty());
        Self { words }
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction fails rather than produce an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_uppercase();
    if !word.is_empty() && word.bytes().all(|u| u.is_ascii_uppercase()) {
        Some(word)
    } else {
        warn!(?word, "skipping word that is not made of the letters A-Z");
        None
    }
}
