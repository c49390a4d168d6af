//! Free-text resolution command (alias, id or title).

use anyhow::Result;
use maisearch::Outcome;

use crate::cli_utils::Context;
use crate::commands::output;

pub async fn run(ctx: &Context, text: &str) -> Result<()> {
    match ctx.resolver.resolve(text).await? {
        Outcome::NoMatch => println!("No song matches \"{}\"", text),
        Outcome::SingleSong(song) => println!("{}", output::song_card(song)),
        Outcome::MultipleSongs(candidates) => {
            println!("\"{}\" matches several songs:", text);
            println!("{}", output::candidate_lines(&candidates));
            println!("Run `maisearch id <id>` to show one");
        }
        Outcome::PendingVotes(votes) => {
            println!("\"{}\" is only a proposed alias, still being voted on:", text);
            println!("{}", output::vote_lines(&votes));
        }
        Outcome::TooMany(count) => {
            println!("{} songs match \"{}\", please narrow the query", count, text)
        }
        Outcome::IdNotFound(id) => println!("No song with id {}", id),
    }
    Ok(())
}
