use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A song an alias points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCandidate {
    pub song_id: String,
    /// Display name, normally the song title
    pub name: String,
}

impl AliasCandidate {
    pub fn new(song_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            song_id: song_id.into(),
            name: name.into(),
        }
    }
}

/// An alias proposal still waiting for community votes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVote {
    /// Vote identifier users reference when approving
    pub tag: String,
    pub song_id: String,
    pub alias: String,
}

/// What the external alias service knows about an alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasLookup {
    Songs(Vec<AliasCandidate>),
    PendingVotes(Vec<PendingVote>),
}

/// External alias service.
///
/// Implementations report an unknown alias as `Error::AliasNotFound`.
pub trait AliasProvider {
    fn lookup(&self, alias: &str) -> impl Future<Output = Result<AliasLookup>> + Send;
}

impl<T: AliasProvider + Sync> AliasProvider for &T {
    fn lookup(&self, alias: &str) -> impl Future<Output = Result<AliasLookup>> + Send {
        (**self).lookup(alias)
    }
}

/// Provider for running without the remote service
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAliasProvider;

impl AliasProvider for OfflineAliasProvider {
    async fn lookup(&self, alias: &str) -> Result<AliasLookup> {
        Err(Error::AliasNotFound(alias.to_string()))
    }
}

/// Normalize alias text for comparison: trimmed and lower-cased
pub fn normalize_alias(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_alias() {
        assert_eq!(normalize_alias(" SDVX "), "sdvx");
        assert_eq!(normalize_alias("\tOshama\n"), "oshama");
        assert_eq!(normalize_alias("   "), "");
    }

    #[tokio::test]
    async fn test_offline_provider_never_finds() {
        let err = OfflineAliasProvider.lookup("anything").await.unwrap_err();
        assert!(matches!(err, Error::AliasNotFound(ref a) if a == "anything"));
    }
}
