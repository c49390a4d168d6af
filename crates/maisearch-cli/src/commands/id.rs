//! Song card by id.

use anyhow::Result;
use maisearch::Error;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, id: &str) -> Result<()> {
    let song = ctx
        .resolver
        .lookup_id(id)
        .ok_or_else(|| Error::SongNotFound(id.to_string()))?;
    println!("{}", output::song_card(song));
    Ok(())
}
