use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::cover::{CoverProvider, cover_file_id};
use crate::error::{Error, Result};

/// Cover image service client (`{endpoint}/{file id}.png`)
#[derive(Clone)]
pub struct HttpCoverProvider {
    client: Client,
    endpoint: String,
}

impl HttpCoverProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, song_id: &str) -> Result<String> {
        Ok(format!("{}/{}.png", self.endpoint, cover_file_id(song_id)?))
    }
}

impl CoverProvider for HttpCoverProvider {
    async fn fetch_cover(&self, song_id: &str) -> Result<Vec<u8>> {
        let url = self.url_for(song_id)?;
        debug!("Downloading cover {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::CoverNotFound(song_id.to_string()));
        }
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_url() {
        let provider =
            HttpCoverProvider::new("https://example.com/covers/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            provider.url_for("10008").unwrap(),
            "https://example.com/covers/00008.png"
        );
    }
}
