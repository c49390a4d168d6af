use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cover::{CoverProvider, cover_file_id};
use crate::error::{Error, Result};

/// Directory of `<file id>.png` jackets
#[derive(Debug, Clone)]
pub struct LocalCoverStore {
    dir: PathBuf,
}

impl LocalCoverStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, song_id: &str) -> Result<PathBuf> {
        Ok(self.dir.join(format!("{}.png", cover_file_id(song_id)?)))
    }
}

impl CoverProvider for LocalCoverStore {
    async fn fetch_cover(&self, song_id: &str) -> Result<Vec<u8>> {
        let path = self.path_for(song_id)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read cover {:?}", path);
                Ok(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::CoverNotFound(song_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
