//! Per-conversation bot state.
//!
//! The dialogue script itself is immutable and shared; everything that
//! changes over a conversation lives here.

/// Mutable conversation state: which states were visited and how much
/// usable information the user has provided so far.
#[derive(Debug, Default)]
pub struct BotSession {
    previous_state: Option<String>,
    current_state: Option<String>,
    information_factor: f32,
}

impl BotSession {
    /// Start a fresh conversation with no visited states.
    pub fn new() -> Self {
        Self::default()
    }

    /// State selected on the turn before the current one, if any
    pub fn previous_state(&self) -> Option<&str> {
        self.previous_state.as_deref()
    }

    /// State selected on the most recent turn, if any
    pub fn current_state(&self) -> Option<&str> {
        self.current_state.as_deref()
    }

    /// How much usable information the user has provided so far.
    ///
    /// The recommend state compares this against the script's threshold to
    /// decide whether it has enough to recommend confidently.
    pub fn information_factor(&self) -> f32 {
        self.information_factor
    }

    /// Credit the session with `count` newly learned entities.
    pub fn increment_information(&mut self, count: usize) {
        self.information_factor += count as f32;
    }

    /// Record that `state` was selected for the current turn.
    pub fn record_transition(&mut self, state: &str) {
        self.previous_state = self.current_state.take();
        self.current_state = Some(state.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_blank() {
        let session = BotSession::new();
        assert_eq!(session.previous_state(), None);
        assert_eq!(session.current_state(), None);
        assert_eq!(session.information_factor(), 0.0);
    }

    #[test]
    fn test_transitions_shift_states() {
        let mut session = BotSession::new();

        session.record_transition("greeting");
        assert_eq!(session.previous_state(), None);
        assert_eq!(session.current_state(), Some("greeting"));

        session.record_transition("got_info");
        assert_eq!(session.previous_state(), Some("greeting"));
        assert_eq!(session.current_state(), Some("got_info"));
    }

    #[test]
    fn test_information_accumulates() {
        let mut session = BotSession::new();
        session.increment_information(2);
        session.increment_information(0);
        session.increment_information(3);
        assert_eq!(session.information_factor(), 5.0);
    }
}
