//! Per-scope guessing-game flags.
//!
//! While a guessing game runs in a scope (a chat group), lookups that would
//! reveal the answer are refused there. The game itself lives elsewhere; it
//! only flips these flags.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct GuessSessions {
    active: RwLock<HashSet<String>>,
}

impl GuessSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a game as running; returns false if one already was
    pub fn start(&self, scope: &str) -> bool {
        let started = self.active.write().insert(scope.to_string());
        debug!("Guess session start in {}: {}", scope, started);
        started
    }

    /// Clear the flag; returns false if no game was running
    pub fn finish(&self, scope: &str) -> bool {
        self.active.write().remove(scope)
    }

    pub fn is_active(&self, scope: &str) -> bool {
        self.active.read().contains(scope)
    }

    /// Fail with `GuessInProgress` when `scope` has a running game
    pub fn ensure_idle(&self, scope: Option<&str>) -> Result<()> {
        match scope {
            Some(scope) if self.is_active(scope) => Err(Error::GuessInProgress(scope.to_string())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let sessions = GuessSessions::new();
        assert!(sessions.start("group-1"));
        assert!(!sessions.start("group-1"));
        assert!(sessions.is_active("group-1"));
        assert!(!sessions.is_active("group-2"));

        assert!(sessions.finish("group-1"));
        assert!(!sessions.finish("group-1"));
        assert!(!sessions.is_active("group-1"));
    }

    #[test]
    fn test_ensure_idle() {
        let sessions = GuessSessions::new();
        sessions.start("group-1");

        assert!(matches!(
            sessions.ensure_idle(Some("group-1")),
            Err(Error::GuessInProgress(_))
        ));
        assert!(sessions.ensure_idle(Some("group-2")).is_ok());
        assert!(sessions.ensure_idle(None).is_ok());
    }
}
