//! Title search command.

use anyhow::Result;
use maisearch::TitleSearch;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, name: &str, page: usize) -> Result<()> {
    match ctx.resolver.search_title(name, page)? {
        TitleSearch::NotFound => println!("No songs found for \"{}\"", name),
        TitleSearch::Single(song) => println!("{}", output::song_card(song)),
        TitleSearch::Paged(listing) => {
            println!("{}", output::paged(&listing, |song| output::song_line(song)))
        }
    }
    Ok(())
}
