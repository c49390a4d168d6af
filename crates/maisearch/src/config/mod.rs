//! Configuration and search constants.
//!
//! This module contains:
//! - `Config` - TOML configuration (catalog/alias paths, remote endpoints, paging)
//! - Search limits and id range constants
//! - Remote service defaults

mod settings;

pub use settings::*;

/// Search paging and result limits.
pub mod search {
    /// Rows per page for paged listings.
    pub const SONGS_PER_PAGE: usize = 25;

    /// Title matches at or above this count are reported as "too many".
    pub const TOO_MANY_THRESHOLD: usize = 50;

    /// Ids at or above this value are utility entries, excluded from
    /// constant-range listings.
    pub const UTILITY_ID_FLOOR: u32 = 100_000;
}

/// Remote service defaults.
pub mod remote {
    use std::time::Duration;

    /// Alias service base URL.
    pub const ALIAS_ENDPOINT: &str = "https://www.yuzuchan.moe/api/maimaidx";

    /// Cover image base URL.
    pub const COVER_ENDPOINT: &str = "https://www.diving-fish.com/covers";

    /// Request timeout for remote calls.
    pub const TIMEOUT: Duration = Duration::from_secs(10);
}
