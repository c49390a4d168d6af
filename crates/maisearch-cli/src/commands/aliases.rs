//! Local alias listing for one song.

use anyhow::Result;
use maisearch::Error;

use crate::cli_utils::Context;

pub fn run(ctx: &Context, song_id: &str) -> Result<()> {
    let song = ctx
        .resolver
        .lookup_id(song_id)
        .ok_or_else(|| Error::SongNotFound(song_id.to_string()))?;

    let aliases = ctx.resolver.aliases().aliases_of(&song.id);
    if aliases.is_empty() {
        println!("{}. {} has no local aliases", song.id, song.title);
    } else {
        println!("Aliases of {}. {}:", song.id, song.title);
        for alias in aliases {
            println!("  {}", alias);
        }
    }
    Ok(())
}
