//! Alias resolution.
//!
//! - `AliasTable` - local alias -> candidate songs index
//! - `AliasProvider` - external alias service interface
//! - `HttpAliasProvider` - alias service over HTTP (`http` feature)
//! - `OfflineAliasProvider`, `MockAliasProvider` - providers without a remote

#[cfg(feature = "http")]
mod http;
mod mock;
mod provider;
mod table;

#[cfg(feature = "http")]
pub use http::*;
pub use mock::*;
pub use provider::*;
pub use table::*;
