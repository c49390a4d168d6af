//! BPM listing command.

use anyhow::Result;
use maisearch::BpmQuery;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, raw: &str) -> Result<()> {
    let query = BpmQuery::parse(raw)?;
    let listing = ctx.resolver.search_bpm(ctx.scope(), &query)?;

    if listing.total == 0 {
        println!("No songs with that BPM");
        return Ok(());
    }
    println!(
        "{}",
        output::paged(&listing, |song| format!("{} BPM {}", output::song_line(song), song.bpm))
    );
    Ok(())
}
