//! Utterance tokenizer.
//!
//! Normalizes a raw user utterance into an ordered sequence of lowercase
//! word tokens. Every downstream matcher works on this token sequence, so
//! the rules here define what "a word" means for the whole system:
//! - a fixed set of punctuation/symbol characters is removed
//! - a trailing possessive marker ("'s") is stripped
//! - apostrophes and hyphens inside a word survive ("can't", "sci-fi")
//!
//! Tokenizing is deterministic and idempotent on already-normalized input.

/// Characters removed from every word. Apostrophe and hyphen are kept so
/// contractions and hyphenated stems stay intact.
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '#', '$', '%', '&', '*', '+',
    '/', '<', '=', '>', '@', '\\', '^', '_', '`', '|', '~',
];

/// Split an utterance into normalized lowercase tokens.
///
/// Empty input yields an empty sequence; there are no error conditions.
pub fn tokenize(utterance: &str) -> Vec<String> {
    utterance
        .to_lowercase()
        .split_whitespace()
        .filter_map(normalize_word)
        .collect()
}

/// Normalize a single whitespace-delimited word, dropping it if nothing
/// survives (e.g. the word was pure punctuation).
fn normalize_word(word: &str) -> Option<String> {
    let stripped: String = word.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    let without_possessive = stripped.strip_suffix("'s").unwrap_or(&stripped);
    let trimmed = without_possessive.trim_matches('\'');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation_and_possessive() {
        assert_eq!(
            tokenize("Tom's Adventure, really!"),
            vec!["tom", "adventure", "really"]
        );
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("GHOSTS and Goblins"), vec!["ghosts", "and", "goblins"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_apostrophe_and_hyphen() {
        assert_eq!(tokenize("I can't watch sci-fi"), vec!["i", "can't", "watch", "sci-fi"]);
    }

    #[test]
    fn test_tokenize_drops_pure_punctuation_words() {
        assert_eq!(tokenize("well ... ?!"), vec!["well"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let once = tokenize("Tom's Adventure, really!");
        let again = tokenize(&once.join(" "));
        assert_eq!(once, again);
    }

    #[test]
    fn test_tokenize_trims_quoting_apostrophes() {
        assert_eq!(tokenize("he said 'hello'"), vec!["he", "said", "hello"]);
    }
}
