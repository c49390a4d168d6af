//! Charter listing command.

use anyhow::Result;
use maisearch::NameQuery;
use maisearch::query::CHARTER_USAGE;

use crate::cli_utils::Context;
use crate::commands::output;

pub fn run(ctx: &Context, raw: &str) -> Result<()> {
    let query = NameQuery::parse(raw, CHARTER_USAGE)?;
    let listing = ctx.resolver.search_charter(ctx.scope(), &query)?;

    if listing.total == 0 {
        println!("No charts by \"{}\"", query.name);
        return Ok(());
    }
    println!("{}", output::paged(&listing, output::match_line));
    Ok(())
}
