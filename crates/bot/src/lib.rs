//! # Bot Crate
//!
//! Scripted dialogue engine for the recommender's conversational front end.
//! The conversation is a flat list of states loaded from a JSON script;
//! each user turn selects one state and renders one of its answers.
//!
//! ## Components
//!
//! - **script**: raw file format, compiled [`DialogueScript`], validation
//! - **session**: per-conversation state ([`BotSession`])
//! - **responder**: turn handling ([`DialogueScript::respond`])
//! - **error**: script loading and validation errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use bot::{BotSession, DialogueScript};
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! let script = DialogueScript::from_file(Path::new("assets/dialogue.json"))?;
//! let mut session = BotSession::new();
//! let mut rng = rand::rng();
//!
//! let tokens = vec!["hello".to_string()];
//! let response = script.respond(&mut session, &tokens, &HashSet::new(), &mut rng);
//! println!("{}", response.text);
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates:
//! - Compiling a config file into a validated domain type
//! - Untagged serde enums for polymorphic JSON fields
//! - Driving randomness through a caller-supplied `Rng` for testability

pub mod error;
pub mod responder;
pub mod script;
pub mod session;

pub use error::{Result, ScriptError};
pub use responder::BotResponse;
pub use script::{DialogueScript, FALLBACK_STATE, INFO_STATE, RECOMMEND_STATE};
pub use session::BotSession;
