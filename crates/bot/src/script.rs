//! Dialogue script definition and compilation.
//!
//! A script is a JSON file describing the bot's conversational states in
//! priority order. This module deserializes the raw file and compiles it
//! into a validated [`DialogueScript`]: trigger patterns become anchored,
//! case-insensitive regexes, and every structural rule is checked up front
//! so the responder can run without error handling.
//!
//! Rust concepts you'll learn:
//! - Untagged serde enums for fields with two JSON shapes
//! - Separating raw deserialization types from validated domain types
//! - Regex compilation with builder options

use crate::error::{Result, ScriptError};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

// ===== Well-known names =====

/// State selected when nothing else matches. Every script must have one,
/// and its position in the state list bounds the scan.
pub const FALLBACK_STATE: &str = "not_understand";

/// State selected whenever the turn carried at least one recognized entity.
pub const INFO_STATE: &str = "got_info";

/// The only state whose answers branch on the gathered-information score.
pub const RECOMMEND_STATE: &str = "recommend";

/// Recommend branch used while the information score is at or below the
/// script's threshold.
pub const BRANCH_FEW: &str = "few";

/// Recommend branch used once the information score exceeds the threshold.
/// Selecting it ends the conversation.
pub const BRANCH_OK: &str = "ok";

/// Marker replaced in an answer by one of the turn's recognized entities.
pub const ENTITY_PLACEHOLDER: &str = "$entity";

// ===== Raw file format =====

/// A dialogue script file as it appears on disk.
#[derive(Debug, Deserialize)]
pub struct ScriptFile {
    /// Recommend switches from the "few" branch to the "ok" branch when the
    /// session's information score strictly exceeds this value
    pub low_information_threshold: f32,
    /// States in priority order
    pub states: Vec<StateDef>,
}

/// One state as declared in the script file.
#[derive(Debug, Deserialize)]
pub struct StateDef {
    pub name: String,
    /// Regex patterns, matched case-insensitively against the start of the
    /// utterance. A state with no triggers is only reachable by name
    /// (got_info, not_understand).
    #[serde(default)]
    pub trigger: Vec<String>,
    pub answers: AnswerDef,
    /// Optional follow-up lines, one of which may be appended to the answer
    #[serde(default)]
    pub concat: Vec<String>,
    /// Percent chance (0-100) of appending a follow-up line
    #[serde(default)]
    pub concat_chance: u32,
}

/// Answer payload: a plain pool, or named branches for the recommend state.
///
/// Rust concept: `#[serde(untagged)]` tries each variant in order, so a JSON
/// array deserializes as `Flat` and a JSON object as `Branched` without any
/// discriminator field in the file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AnswerDef {
    Flat(Vec<String>),
    Branched(HashMap<String, Vec<String>>),
}

// ===== Compiled script =====

/// Validated answer payload of a compiled state.
#[derive(Debug)]
pub enum Answers {
    /// One pool, any state but recommend
    Flat(Vec<String>),
    /// The recommend state's two pools, both guaranteed non-empty
    Branched { few: Vec<String>, ok: Vec<String> },
}

/// A compiled dialogue state.
#[derive(Debug)]
pub struct State {
    name: String,
    triggers: Vec<Regex>,
    answers: Answers,
    addenda: Vec<String>,
    concat_chance: u32,
}

impl State {
    fn compile(def: StateDef) -> Result<Self> {
        let mut triggers = Vec::with_capacity(def.trigger.len());
        for pattern in &def.trigger {
            // Anchor every pattern at the start of the utterance; the
            // non-capturing group keeps alternations like "a|b" anchored too
            let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
                .case_insensitive(true)
                .build()
                .map_err(|source| ScriptError::BadTrigger {
                    state: def.name.clone(),
                    source,
                })?;
            triggers.push(regex);
        }

        let answers = Answers::compile(&def.name, def.answers)?;

        Ok(Self {
            name: def.name,
            triggers,
            answers,
            addenda: def.concat,
            concat_chance: def.concat_chance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if any trigger pattern matches the start of the utterance
    pub fn matches(&self, utterance: &str) -> bool {
        self.triggers.iter().any(|t| t.is_match(utterance))
    }

    pub(crate) fn answers(&self) -> &Answers {
        &self.answers
    }

    pub(crate) fn addenda(&self) -> &[String] {
        &self.addenda
    }

    pub(crate) fn concat_chance(&self) -> u32 {
        self.concat_chance
    }
}

impl Answers {
    fn compile(state: &str, def: AnswerDef) -> Result<Self> {
        match def {
            AnswerDef::Flat(pool) => {
                // Recommend must branch; the responder picks a branch
                // unconditionally when it lands there
                if state == RECOMMEND_STATE {
                    return Err(ScriptError::MissingBranch {
                        state: state.to_string(),
                        branch: BRANCH_FEW.to_string(),
                    });
                }
                if pool.is_empty() {
                    return Err(ScriptError::EmptyAnswers {
                        state: state.to_string(),
                    });
                }
                Ok(Answers::Flat(pool))
            }
            AnswerDef::Branched(mut branches) => {
                if state != RECOMMEND_STATE {
                    return Err(ScriptError::UnsupportedBranching {
                        state: state.to_string(),
                    });
                }
                let few = take_branch(state, &mut branches, BRANCH_FEW)?;
                let ok = take_branch(state, &mut branches, BRANCH_OK)?;
                Ok(Answers::Branched { few, ok })
            }
        }
    }
}

fn take_branch(
    state: &str,
    branches: &mut HashMap<String, Vec<String>>,
    branch: &str,
) -> Result<Vec<String>> {
    let pool = branches
        .remove(branch)
        .ok_or_else(|| ScriptError::MissingBranch {
            state: state.to_string(),
            branch: branch.to_string(),
        })?;
    if pool.is_empty() {
        return Err(ScriptError::EmptyAnswers {
            state: state.to_string(),
        });
    }
    Ok(pool)
}

/// A fully validated dialogue script.
///
/// Compilation guarantees:
/// - Exactly one state is named "not_understand"
/// - Every answer pool (and both recommend branches) is non-empty
/// - Every trigger pattern compiled
#[derive(Debug)]
pub struct DialogueScript {
    states: Vec<State>,
    low_information_threshold: f32,
    /// Validated position of the "not_understand" state
    fallback_idx: usize,
}

impl DialogueScript {
    /// Read and compile a script file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file: ScriptFile = serde_json::from_str(&contents)?;
        let script = Self::compile(file)?;
        info!(
            "Compiled dialogue script with {} states from {:?}",
            script.states.len(),
            path
        );
        Ok(script)
    }

    /// Compile a raw script, validating its structure.
    pub fn compile(file: ScriptFile) -> Result<Self> {
        let mut states = Vec::with_capacity(file.states.len());
        let mut fallback_idx: Option<usize> = None;

        for (idx, def) in file.states.into_iter().enumerate() {
            if def.name == FALLBACK_STATE {
                if fallback_idx.is_some() {
                    return Err(ScriptError::DuplicateFallback);
                }
                fallback_idx = Some(idx);
            }
            states.push(State::compile(def)?);
        }

        let fallback_idx = fallback_idx.ok_or(ScriptError::MissingFallback)?;

        Ok(Self {
            states,
            low_information_threshold: file.low_information_threshold,
            fallback_idx,
        })
    }

    /// States in priority order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The "not_understand" state
    pub(crate) fn fallback(&self) -> &State {
        &self.states[self.fallback_idx]
    }

    pub fn low_information_threshold(&self) -> f32 {
        self.low_information_threshold
    }
}
