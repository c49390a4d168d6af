//! # maisearch
//!
//! Song catalog query engine for maimai DX.
//!
//! This crate provides:
//! - Song and chart records loaded from the music data JSON
//! - An immutable catalog with id/title indexes and chart filters
//! - Local alias tables and a remote alias service client
//! - A resolver that turns free text into a typed match outcome
//! - Paged listings by constant, BPM, artist and charter
//! - Jacket lookup from a local directory or a remote mirror
//!
//! ## Feature Flags
//!
//! - `http` (default): Enables the reqwest-backed alias and cover providers.

pub mod alias;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod cover;
pub mod error;
pub mod page;
pub mod prelude;
pub mod query;
pub mod session;

// Re-export from chart module
pub use chart::{Chart, ChartType, Difficulty, SongRecord, load_music_data, parse_music_data};

// Re-export from catalog module
pub use catalog::{BpmFilter, Catalog, Filter, LevelRow, SongMatch};

// Re-export from alias module
pub use alias::{
    AliasCandidate, AliasLookup, AliasProvider, AliasTable, MockAliasProvider,
    OfflineAliasProvider, PendingVote,
};
#[cfg(feature = "http")]
pub use alias::HttpAliasProvider;

// Re-export from cover module
pub use cover::{ChainedCoverProvider, CoverProvider, LocalCoverStore, cover_file_id};
#[cfg(feature = "http")]
pub use cover::HttpCoverProvider;

pub use config::Config;
pub use error::{Error, Result};
pub use page::{Page, Paged, paginate};
pub use query::{BpmQuery, ConstantQuery, CoverTarget, NameQuery, Outcome, Resolver, TitleSearch};
pub use session::GuessSessions;
