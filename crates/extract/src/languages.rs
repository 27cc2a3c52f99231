//! Language mention extraction.
//!
//! Maps English language names found in the token stream to the ISO-639-1
//! codes the corpus stores. Only full names match: several bare codes ("hi",
//! "it") collide with everyday words, so they are deliberately not looked up.

use std::collections::HashSet;

/// English language name to ISO-639-1 code
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("chinese", "zh"),
    ("hindi", "hi"),
    ("russian", "ru"),
    ("portuguese", "pt"),
];

/// Collect the ISO codes of every language named in the tokens.
pub fn identify_languages(tokens: &[String]) -> HashSet<String> {
    let mut codes = HashSet::new();
    for token in tokens {
        for (name, code) in LANGUAGE_NAMES {
            if token == name {
                codes.insert(code.to_string());
            }
        }
    }
    codes
}
