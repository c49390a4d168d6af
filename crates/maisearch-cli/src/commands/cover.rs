//! Jacket download command.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use maisearch::{
    ChainedCoverProvider, CoverProvider, CoverTarget, Error, HttpCoverProvider, LocalCoverStore,
    cover_file_id,
};
use tracing::info;

use crate::cli_utils::Context;
use crate::commands::output;

pub async fn run(ctx: &Context, text: &str, output_path: Option<&Path>) -> Result<()> {
    let song_id = match ctx.resolver.cover_target(text)? {
        CoverTarget::Song(id) => id,
        CoverTarget::Ambiguous(candidates) => {
            println!("\"{}\" matches several songs:", text);
            println!("{}", output::candidate_lines(&candidates));
            return Ok(());
        }
        CoverTarget::NotFound => return Err(Error::SongNotFound(text.to_string()).into()),
    };

    let local = LocalCoverStore::new(&ctx.config.covers.dir);
    let bytes = if ctx.offline {
        local.fetch_cover(&song_id).await?
    } else {
        let remote = HttpCoverProvider::new(
            ctx.config.remote.cover_endpoint.as_str(),
            ctx.config.remote.timeout(),
        )?;
        ChainedCoverProvider::new(local, remote)
            .fetch_cover(&song_id)
            .await?
    };

    let path = match output_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.png", cover_file_id(&song_id)?)),
    };
    std::fs::write(&path, &bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Cover for song {} written ({} bytes)", song_id, bytes.len());
    println!("Saved cover of song {} to {}", song_id, path.display());
    Ok(())
}
