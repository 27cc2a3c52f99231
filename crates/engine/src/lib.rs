//! # Engine Crate
//!
//! Ties the workspace together into a conversational recommendation
//! session: corpus loading, entity extraction, per-turn scoring and the
//! scripted dialogue, behind one [`ChatSession`] type.
//!
//! ## Components
//!
//! - **config**: scoring weights and limits ([`EngineConfig`])
//! - **session**: the end-to-end conversation ([`ChatSession`])
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{ChatSession, EngineConfig};
//! use std::path::Path;
//!
//! let mut session = ChatSession::open(
//!     Path::new("data"),
//!     Path::new("assets"),
//!     Path::new("corpus-cache.json"),
//!     EngineConfig::default(),
//! )?;
//!
//! let response = session.process_turn("hi! i love horror movies");
//! println!("{}", response.text);
//! if response.should_end {
//!     for (title, likeness) in session.recommendations() {
//!         println!("{likeness:.2}  {title}");
//!     }
//! }
//! ```

pub mod config;
pub mod session;

pub use bot::BotResponse;
pub use config::EngineConfig;
pub use session::ChatSession;
