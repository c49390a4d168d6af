//! Constant-range listing command.

use anyhow::Result;
use maisearch::ConstantQuery;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, raw: &str) -> Result<()> {
    let query = ConstantQuery::parse(raw)?;
    let listing = ctx.resolver.search_constant(&query);

    if listing.total == 0 {
        println!("No charts between {:.1} and {:.1}", query.low, query.high);
        return Ok(());
    }
    println!("{}", output::paged(&listing, output::level_line));
    Ok(())
}
