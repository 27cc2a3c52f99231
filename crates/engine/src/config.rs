//! Engine tuning knobs.
//!
//! The weights decide how strongly each kind of recognized entity bumps a
//! movie's likeness. Mentioning a movie by title is the strongest possible
//! signal; a language preference is the weakest.

use scoring::{
    GenrePunctuator, KeywordPunctuator, LanguagePunctuator, PersonPunctuator, ScoringPass,
    TitlePunctuator,
};

/// Weights and limits for a chat session.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Likeness added per matched genre
    pub genre_weight: f32,
    /// Likeness added per matched keyword
    pub keyword_weight: f32,
    /// Likeness added when a mentioned person is in the cast or crew
    pub person_weight: f32,
    /// Likeness added when the movie is in a mentioned language
    pub language_weight: f32,
    /// Likeness added when the movie itself is mentioned by title
    pub title_weight: f32,
    /// How many movies a finished session recommends
    pub recommend_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            genre_weight: 0.5,
            keyword_weight: 0.75,
            person_weight: 1.5,
            language_weight: 0.25,
            title_weight: 3.0,
            recommend_count: 5,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder-style setters

    pub fn with_genre_weight(mut self, weight: f32) -> Self {
        self.genre_weight = weight;
        self
    }

    pub fn with_keyword_weight(mut self, weight: f32) -> Self {
        self.keyword_weight = weight;
        self
    }

    pub fn with_person_weight(mut self, weight: f32) -> Self {
        self.person_weight = weight;
        self
    }

    pub fn with_language_weight(mut self, weight: f32) -> Self {
        self.language_weight = weight;
        self
    }

    pub fn with_title_weight(mut self, weight: f32) -> Self {
        self.title_weight = weight;
        self
    }

    pub fn with_recommend_count(mut self, count: usize) -> Self {
        self.recommend_count = count;
        self
    }

    /// Build the per-turn scoring pass from these weights.
    pub fn scoring_pass(&self) -> ScoringPass {
        ScoringPass::new()
            .add_punctuator(GenrePunctuator::new(self.genre_weight))
            .add_punctuator(KeywordPunctuator::new(self.keyword_weight))
            .add_punctuator(PersonPunctuator::new(self.person_weight))
            .add_punctuator(LanguagePunctuator::new(self.language_weight))
            .add_punctuator(TitlePunctuator::new(self.title_weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = EngineConfig::default();
        assert_eq!(config.genre_weight, 0.5);
        assert_eq!(config.title_weight, 3.0);
        assert_eq!(config.recommend_count, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::new()
            .with_genre_weight(1.0)
            .with_recommend_count(10);
        assert_eq!(config.genre_weight, 1.0);
        assert_eq!(config.recommend_count, 10);
        // Untouched fields keep their defaults
        assert_eq!(config.person_weight, 1.5);
    }
}
