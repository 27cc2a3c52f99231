//! The chat session: one conversation wired end to end.
//!
//! [`ChatSession`] owns every moving part of a conversation: the scored
//! corpus, the extraction indexes, the dialogue script and the bot state.
//! Each user turn flows through the same path:
//!
//! 1. Tokenize the utterance
//! 2. Extract entities (genres, keywords, persons, languages, titles)
//! 3. Apply the scoring pass to the corpus
//! 4. Let the dialogue script respond
//! 5. Credit newly seen entities toward the information score
//!
//! Rust concept: the session owns its own `StdRng`. Production sessions
//! seed it from the OS; tests seed it from a number and get reproducible
//! conversations.

use crate::config::EngineConfig;
use anyhow::{Context, Result};
use bot::{BotResponse, BotSession, DialogueScript};
use data_loader::Corpus;
use extract::{PersonIndex, Taxonomy, TitleIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scoring::TurnEntities;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Taxonomy file name under the assets directory
const TAXONOMY_FILE: &str = "taxonomy.json";
/// Person list file name under the assets directory
const PERSONS_FILE: &str = "persons.json";
/// Dialogue script file name under the assets directory
const DIALOGUE_FILE: &str = "dialogue.json";

/// A full conversational recommendation session.
pub struct ChatSession {
    corpus: Corpus,
    taxonomy: Taxonomy,
    persons: PersonIndex,
    titles: TitleIndex,
    script: DialogueScript,
    session: BotSession,
    pass: scoring::ScoringPass,
    recommend_count: usize,
    /// Entities already credited toward the information score
    seen: HashSet<String>,
    rng: StdRng,
}

impl ChatSession {
    /// Load everything a session needs from disk and wire it together.
    ///
    /// `data_dir` holds the three dataset CSVs, `assets_dir` the taxonomy,
    /// person list and dialogue script, and `cache_path` the corpus cache.
    pub fn open(
        data_dir: &Path,
        assets_dir: &Path,
        cache_path: &Path,
        config: EngineConfig,
    ) -> Result<Self> {
        info!("Opening chat session");

        let corpus =
            Corpus::load(data_dir, cache_path).context("Failed to load the movie corpus")?;
        let taxonomy = Taxonomy::from_file(&assets_dir.join(TAXONOMY_FILE))
            .context("Failed to load the genre taxonomy")?;
        let persons = PersonIndex::from_file(&assets_dir.join(PERSONS_FILE))
            .context("Failed to load the person index")?;
        let script = DialogueScript::from_file(&assets_dir.join(DIALOGUE_FILE))
            .context("Failed to load the dialogue script")?;

        Ok(Self::from_parts(corpus, taxonomy, persons, script, config))
    }

    /// Wire a session from already-loaded parts.
    ///
    /// The title index is derived from the corpus, so callers never build
    /// one themselves.
    pub fn from_parts(
        corpus: Corpus,
        taxonomy: Taxonomy,
        persons: PersonIndex,
        script: DialogueScript,
        config: EngineConfig,
    ) -> Self {
        let titles = TitleIndex::new(corpus.title_set());
        info!(
            "Session ready: {} movies, {} known persons",
            corpus.len(),
            persons.len()
        );

        Self {
            corpus,
            taxonomy,
            persons,
            titles,
            script,
            session: BotSession::new(),
            pass: config.scoring_pass(),
            recommend_count: config.recommend_count,
            seen: HashSet::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the session's RNG with a seeded one, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Handle one user turn: score the corpus, answer, update the session.
    #[instrument(skip(self, utterance))]
    pub fn process_turn(&mut self, utterance: &str) -> BotResponse {
        let tokens = extract::tokenize(utterance);

        // 1. Extract every kind of entity from the token stream
        let (genres, keywords) = extract::identify_genre(&tokens, &self.taxonomy);
        let persons = extract::identify_persons(&tokens, &self.persons);
        let languages = extract::identify_languages(&tokens);
        let titles = extract::identify_titles(&tokens, &self.titles);

        let entities = TurnEntities {
            genres,
            keywords,
            persons,
            languages,
            titles,
        };

        // 2. Every mention bumps the matching movies before the bot answers
        let touched = self.pass.apply(&mut self.corpus, &entities);
        debug!("Scoring pass touched {} records", touched);

        // 3. The dialogue machine sees the combined core entities; the
        // recommend branch is decided on the score gathered BEFORE this turn
        let combined = entities.combined();
        let response = self
            .script
            .respond(&mut self.session, &tokens, &combined, &mut self.rng);

        // 4. Credit entities never seen in this conversation
        let fresh = combined
            .into_iter()
            .filter(|entity| self.seen.insert(entity.clone()))
            .count();
        self.session.increment_information(fresh);

        debug!(
            "Turn complete: state={}, information_factor={}",
            response.state,
            self.session.information_factor()
        );
        response
    }

    /// The `count` highest-scored movies as (title, likeness) pairs.
    pub fn top_n(&self, count: usize) -> Vec<(String, f32)> {
        scoring::top_n(&self.corpus, count)
            .into_iter()
            .map(|record| (record.title().to_string(), record.likeness()))
            .collect()
    }

    /// The configured number of recommendations for this session.
    pub fn recommendations(&self) -> Vec<(String, f32)> {
        self.top_n(self.recommend_count)
    }

    /// How much usable information the user has provided so far
    pub fn information_factor(&self) -> f32 {
        self.session.information_factor()
    }

    /// The scored corpus backing this session
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
