//! Punctuator implementations for the scoring pass.
//!
//! Each punctuator pairs one `punctuate_*` operation with its configured
//! weight, so a pass can be assembled from whichever entity types a session
//! cares about.

use crate::entities::TurnEntities;
use crate::punctuate;
use crate::traits::Punctuator;
use data_loader::Corpus;

/// Scores genre matches.
pub struct GenrePunctuator {
    weight: f32,
}

impl GenrePunctuator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Punctuator for GenrePunctuator {
    fn name(&self) -> &str {
        "GenrePunctuator"
    }

    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        punctuate::punctuate_genres(corpus, &entities.genres, self.weight)
    }
}

/// Scores keyword matches (keyword set or overview mention).
pub struct KeywordPunctuator {
    weight: f32,
}

impl KeywordPunctuator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Punctuator for KeywordPunctuator {
    fn name(&self) -> &str {
        "KeywordPunctuator"
    }

    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        punctuate::punctuate_keywords(corpus, &entities.keywords, self.weight)
    }
}

/// Scores cast and crew matches.
pub struct PersonPunctuator {
    weight: f32,
}

impl PersonPunctuator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Punctuator for PersonPunctuator {
    fn name(&self) -> &str {
        "PersonPunctuator"
    }

    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        punctuate::punctuate_persons(corpus, &entities.persons, self.weight)
    }
}

/// Scores original-language matches.
pub struct LanguagePunctuator {
    weight: f32,
}

impl LanguagePunctuator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Punctuator for LanguagePunctuator {
    fn name(&self) -> &str {
        "LanguagePunctuator"
    }

    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        punctuate::punctuate_language(corpus, &entities.languages, self.weight)
    }
}

/// Scores title mentions.
pub struct TitlePunctuator {
    weight: f32,
}

impl TitlePunctuator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Punctuator for TitlePunctuator {
    fn name(&self) -> &str {
        "TitlePunctuator"
    }

    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        punctuate::punctuate_movies(corpus, &entities.titles, self.weight)
    }
}
