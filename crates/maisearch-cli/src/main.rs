mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use cli_utils::{Context, join_args};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn by default when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maisearch_cli=warn,maisearch=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::load(&args)?;

    match &args.command {
        Command::Search { name, page } => commands::search::run(&ctx, &join_args(name), *page),
        Command::Base { args } => commands::base::run(&ctx, &join_args(args)),
        Command::Bpm { args } => commands::bpm::run(&ctx, &join_args(args)),
        Command::Artist { args } => commands::artist::run(&ctx, &join_args(args)),
        Command::Charter { args } => commands::charter::run(&ctx, &join_args(args)),
        Command::What { text } => commands::what::run(&ctx, &join_args(text)).await,
        Command::Id { id } => commands::id::run(&ctx, id),
        Command::Cover { text, output } => {
            commands::cover::run(&ctx, &join_args(text), output.as_deref()).await
        }
        Command::Aliases { song_id } => commands::aliases::run(&ctx, song_id),
    }
}
