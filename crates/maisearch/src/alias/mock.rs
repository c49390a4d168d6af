//! Scripted alias provider for testing
//!
//! Answers lookups from a fixed table instead of the remote service and
//! counts how often it was asked.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::alias::{AliasCandidate, AliasLookup, AliasProvider, PendingVote, normalize_alias};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum Scripted {
    Lookup(AliasLookup),
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct MockAliasProvider {
    responses: HashMap<String, Scripted>,
    calls: AtomicUsize,
}

impl MockAliasProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `alias` with song candidates
    pub fn with_songs(mut self, alias: &str, songs: Vec<AliasCandidate>) -> Self {
        self.responses.insert(
            normalize_alias(alias),
            Scripted::Lookup(AliasLookup::Songs(songs)),
        );
        self
    }

    /// Answer `alias` with pending votes
    pub fn with_votes(mut self, alias: &str, votes: Vec<PendingVote>) -> Self {
        self.responses.insert(
            normalize_alias(alias),
            Scripted::Lookup(AliasLookup::PendingVotes(votes)),
        );
        self
    }

    /// Fail `alias` as if the service were down
    pub fn with_failure(mut self, alias: &str, message: &str) -> Self {
        self.responses.insert(
            normalize_alias(alias),
            Scripted::Unavailable(message.to_string()),
        );
        self
    }

    /// Number of lookups served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AliasProvider for MockAliasProvider {
    async fn lookup(&self, alias: &str) -> Result<AliasLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(&normalize_alias(alias)) {
            Some(Scripted::Lookup(lookup)) => Ok(lookup.clone()),
            Some(Scripted::Unavailable(message)) => Err(Error::ProviderUnavailable(message.clone())),
            None => Err(Error::AliasNotFound(alias.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_responses() {
        let provider = MockAliasProvider::new()
            .with_songs("tls", vec![AliasCandidate::new("8", "True Love Song")])
            .with_failure("down", "503");

        assert!(matches!(
            provider.lookup(" TLS").await,
            Ok(AliasLookup::Songs(ref songs)) if songs.len() == 1
        ));
        assert!(matches!(
            provider.lookup("down").await,
            Err(Error::ProviderUnavailable(_))
        ));
        assert!(matches!(
            provider.lookup("missing").await,
            Err(Error::AliasNotFound(_))
        ));
        assert_eq!(provider.calls(), 3);
    }
}
