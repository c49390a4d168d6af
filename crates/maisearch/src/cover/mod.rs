//! Cover-art retrieval.
//!
//! Jackets are addressed by a five-digit file id. Deluxe re-releases of
//! standard songs (ids 10001..=10999) share the standard song's jacket.

#[cfg(feature = "http")]
mod http;
mod local;

#[cfg(feature = "http")]
pub use http::*;
pub use local::*;

use std::future::Future;

use crate::error::{Error, Result};

/// Source of cover images.
///
/// Implementations report a missing image as `Error::CoverNotFound`.
pub trait CoverProvider {
    fn fetch_cover(&self, song_id: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Jacket file id for a song id, zero-padded to five digits
pub fn cover_file_id(song_id: &str) -> Result<String> {
    let id: u32 = song_id
        .trim()
        .parse()
        .map_err(|_| Error::CoverNotFound(song_id.to_string()))?;
    let id = if (10_001..=10_999).contains(&id) {
        id - 10_000
    } else {
        id
    };
    Ok(format!("{:05}", id))
}

/// Try `primary`, falling back to `fallback` when the cover is not found
#[derive(Debug, Clone)]
pub struct ChainedCoverProvider<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> ChainedCoverProvider<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A, B> CoverProvider for ChainedCoverProvider<A, B>
where
    A: CoverProvider + Sync,
    B: CoverProvider + Sync,
{
    async fn fetch_cover(&self, song_id: &str) -> Result<Vec<u8>> {
        match self.primary.fetch_cover(song_id).await {
            Err(Error::CoverNotFound(_)) => self.fallback.fetch_cover(song_id).await,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_file_id() {
        assert_eq!(cover_file_id("8").unwrap(), "00008");
        assert_eq!(cover_file_id("10008").unwrap(), "00008");
        assert_eq!(cover_file_id("11663").unwrap(), "11663");
        assert_eq!(cover_file_id("10000").unwrap(), "10000");
        assert!(matches!(
            cover_file_id("abc"),
            Err(Error::CoverNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_chained_falls_back_on_not_found() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        std::fs::write(dir_b.path().join("00008.png"), b"png-b").unwrap();

        let chained = ChainedCoverProvider::new(
            LocalCoverStore::new(dir_a.path()),
            LocalCoverStore::new(dir_b.path()),
        );
        assert_eq!(chained.fetch_cover("8").await.unwrap(), b"png-b");
        assert!(matches!(
            chained.fetch_cover("9").await,
            Err(Error::CoverNotFound(_))
        ));
    }
}
