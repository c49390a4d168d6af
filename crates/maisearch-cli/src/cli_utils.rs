//! Common CLI utility functions shared across commands.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use maisearch::{
    AliasLookup, AliasProvider, AliasTable, Catalog, Config, GuessSessions, HttpAliasProvider,
    OfflineAliasProvider, Resolver,
};
use tracing::{debug, info};

use crate::cli::Args;

/// Alias provider chosen at startup
pub enum CliAliasProvider {
    Offline(OfflineAliasProvider),
    Http(HttpAliasProvider),
}

impl AliasProvider for CliAliasProvider {
    async fn lookup(&self, alias: &str) -> maisearch::Result<AliasLookup> {
        match self {
            Self::Offline(provider) => provider.lookup(alias).await,
            Self::Http(provider) => provider.lookup(alias).await,
        }
    }
}

/// Loaded configuration and data shared by every command
pub struct Context {
    pub config: Config,
    pub offline: bool,
    pub scope: Option<String>,
    pub resolver: Resolver<CliAliasProvider>,
}

impl Context {
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = Config::load_or_default(&args.config)
            .with_context(|| format!("Failed to load config {:?}", args.config))?;

        if let Some(path) = &args.catalog {
            config.catalog.path = path.clone();
        }
        if let Some(path) = &args.aliases {
            config.aliases.path = Some(path.clone());
        }
        if let Some(size) = args.page_size {
            config.search.page_size = size;
        }
        let offline = args.offline || !config.remote.enabled;

        let catalog = Catalog::load(&config.catalog.path)
            .with_context(|| format!("Failed to load catalog {:?}", config.catalog.path))?;

        let aliases = match &config.aliases.path {
            Some(path) => AliasTable::load(path)
                .with_context(|| format!("Failed to load aliases {:?}", path))?,
            None => AliasTable::new(),
        };

        let provider = if offline {
            debug!("Running without the alias service");
            CliAliasProvider::Offline(OfflineAliasProvider)
        } else {
            CliAliasProvider::Http(HttpAliasProvider::new(
                config.remote.alias_endpoint.as_str(),
                config.remote.timeout(),
            )?)
        };

        let resolver = Resolver::new(Arc::new(catalog), Arc::new(aliases), provider)
            .with_sessions(Arc::new(GuessSessions::new()))
            .with_search_config(config.search.clone());
        info!(
            "Ready: {} songs, {} local aliases",
            resolver.catalog().len(),
            resolver.aliases().alias_count()
        );

        if args.guessing
            && let Some(scope) = &args.scope
        {
            resolver.sessions().start(scope);
        }

        Ok(Self {
            config,
            offline,
            scope: args.scope.clone(),
            resolver,
        })
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

/// Join positional words back into the raw command text
pub fn join_args(args: &[String]) -> String {
    args.join(" ")
}
