//! Turn handling: state selection and answer rendering.
//!
//! One call to [`DialogueScript::respond`] handles one user turn:
//!
//! 1. Scan the states in script order to select one (see below)
//! 2. Pick the answer pool (recommend branches on the information score)
//! 3. Draw a uniform random answer from the pool
//! 4. Maybe append a follow-up line, per the state's concat chance
//! 5. Substitute the entity placeholder from the turn's entities
//! 6. Record the transition on the session
//!
//! The scan gives the script author positional control:
//! - Reaching "not_understand" stops the scan; it is selected only if no
//!   earlier state matched, and states after it can never match
//! - "got_info" is selected exactly when the turn carried entities, and
//!   overrides any earlier trigger match
//! - Among ordinary states, the last one whose trigger matches wins

use crate::script::{
    Answers, DialogueScript, State, ENTITY_PLACEHOLDER, FALLBACK_STATE, INFO_STATE,
};
use crate::session::BotSession;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// The bot's reply for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct BotResponse {
    /// Rendered answer text
    pub text: String,
    /// Name of the selected state
    pub state: String,
    /// True when the conversation has reached its natural end
    pub should_end: bool,
}

impl DialogueScript {
    /// Produce the bot's reply to one tokenized utterance.
    ///
    /// `entities` holds the genre, keyword and person names recognized in
    /// this turn; it gates the "got_info" state and fills the answer
    /// placeholder.
    pub fn respond<R: Rng>(
        &self,
        session: &mut BotSession,
        tokens: &[String],
        entities: &HashSet<String>,
        rng: &mut R,
    ) -> BotResponse {
        let utterance = tokens.join(" ");

        // 1. Select a state
        let mut selected: Option<&State> = None;
        for state in self.states() {
            match state.name() {
                FALLBACK_STATE => {
                    if selected.is_none() {
                        selected = Some(state);
                    }
                    break;
                }
                INFO_STATE => {
                    if !entities.is_empty() {
                        selected = Some(state);
                        break;
                    }
                }
                _ => {
                    if state.matches(&utterance) {
                        selected = Some(state);
                    }
                }
            }
        }
        // Compilation guarantees a fallback state, so the scan cannot come
        // up empty unless got_info sits above it and broke out first
        let state = selected.unwrap_or_else(|| self.fallback());
        debug!("Selected state {:?} for utterance {:?}", state.name(), utterance);

        // 2. Pick the answer pool; only recommend branches, and only its
        // "ok" branch ends the conversation
        let (pool, should_end) = match state.answers() {
            Answers::Flat(pool) => (pool.as_slice(), false),
            Answers::Branched { few, ok } => {
                if session.information_factor() > self.low_information_threshold() {
                    (ok.as_slice(), true)
                } else {
                    (few.as_slice(), false)
                }
            }
        };

        // 3. Draw the answer (pools are never empty after compilation)
        let mut text = pool.choose(rng).cloned().unwrap_or_default();

        // 4. Maybe append a follow-up line
        if !state.addenda().is_empty() && rng.random_range(0..100) < state.concat_chance() {
            if let Some(extra) = state.addenda().choose(rng) {
                text.push(' ');
                text.push_str(extra);
            }
        }

        // 5. Fill the placeholder; with no entities it stays literal
        if text.contains(ENTITY_PLACEHOLDER) {
            let mut candidates: Vec<&String> = entities.iter().collect();
            candidates.sort();
            if let Some(entity) = candidates.choose(rng) {
                text = text.replace(ENTITY_PLACEHOLDER, entity);
            }
        }

        // 6. Record the transition
        session.record_transition(state.name());

        BotResponse {
            text,
            state: state.name().to_string(),
            should_end,
        }
    }
}
