//! Artist listing command.

use anyhow::Result;
use maisearch::NameQuery;
use maisearch::query::ARTIST_USAGE;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, raw: &str) -> Result<()> {
    let query = NameQuery::parse(raw, ARTIST_USAGE)?;
    let listing = ctx.resolver.search_artist(ctx.scope(), &query)?;

    if listing.total == 0 {
        println!("No songs by \"{}\"", query.name);
        return Ok(());
    }
    println!(
        "{}",
        output::paged(&listing, |found| format!(
            "{} | {}",
            output::song_line(found.song),
            found.song.artist
        ))
    );
    Ok(())
}
