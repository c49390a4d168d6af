//! Commonly used types for embedding the resolver.
//!
//! ```ignore
//! use maisearch::prelude::*;
//! ```

pub use crate::alias::{AliasCandidate, AliasProvider, AliasTable, PendingVote};
pub use crate::catalog::Catalog;
pub use crate::chart::{Difficulty, SongRecord};
pub use crate::cover::CoverProvider;
pub use crate::error::{Error, Result};
pub use crate::page::Paged;
pub use crate::query::{CoverTarget, Outcome, Resolver, TitleSearch};
pub use crate::session::GuessSessions;
