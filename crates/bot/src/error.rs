//! Error types for dialogue script loading and validation.
//!
//! Rust concept: script problems are reported at load time, not at
//! conversation time. Every structural rule the responder relies on
//! (a fallback state exists, answer pools are non-empty, the recommend
//! state carries both branches) is checked once while compiling the
//! script, so `respond` never has to return an error.

use thiserror::Error;

/// Errors that can occur when loading or compiling a dialogue script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Failed to read the script file
    #[error("Failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    /// The script file is not valid JSON
    #[error("Failed to parse script JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No state named "not_understand" was declared
    #[error("script declares no \"not_understand\" fallback state")]
    MissingFallback,

    /// More than one state claims the fallback name
    #[error("script declares more than one \"not_understand\" state")]
    DuplicateFallback,

    /// A state (or one of its branches) has no answers to choose from
    #[error("state {state:?} has an empty answer pool")]
    EmptyAnswers { state: String },

    /// The recommend state is missing one of its answer branches
    #[error("state {state:?} is missing its {branch:?} answer branch")]
    MissingBranch { state: String, branch: String },

    /// Only the recommend state may split its answers into branches
    #[error("state {state:?} declares branched answers; only \"recommend\" may branch")]
    UnsupportedBranching { state: String },

    /// A trigger pattern failed to compile as a regular expression
    #[error("state {state:?} has an invalid trigger pattern")]
    BadTrigger {
        state: String,
        #[source]
        source: regex::Error,
    },
}

/// Convenience Result type for script operations.
pub type Result<T> = std::result::Result<T, ScriptError>;
