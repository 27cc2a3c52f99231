//! Title mention extraction.
//!
//! Looks for known movie titles inside the token stream by sliding windows
//! of one to three tokens over it. Longer titles go undetected, the same
//! trade-off the two-token person matcher makes.

use std::collections::HashSet;

/// Longest title, in tokens, the matcher will look for
const MAX_TITLE_TOKENS: usize = 3;

/// Immutable set of lowercased known titles.
///
/// Built from the corpus's titles and original titles at session start.
#[derive(Debug, Clone)]
pub struct TitleIndex {
    titles: HashSet<String>,
}

impl TitleIndex {
    pub fn new(titles: impl IntoIterator<Item = String>) -> Self {
        Self {
            titles: titles.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Collect every known title mentioned in the tokens.
pub fn identify_titles(tokens: &[String], index: &TitleIndex) -> HashSet<String> {
    let mut found = HashSet::new();
    for width in 1..=MAX_TITLE_TOKENS {
        for window in tokens.windows(width) {
            let candidate = window.join(" ");
            if index.contains(&candidate) {
                found.insert(candidate);
            }
        }
    }
    found
}
