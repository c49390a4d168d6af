//! Chart-related types and data structures.
//!
//! This module contains types for representing catalog songs:
//! - `Difficulty` - difficulty tiers (BASIC, ADVANCED, EXPERT, MASTER, RE:MASTER)
//! - `Chart`, `ChartType` - per-difficulty chart metadata
//! - `SongRecord` - one song and its charts
//! - `parse_music_data` / `load_music_data` - catalog JSON loader

mod difficulty;
mod music_data;
mod song;

pub use difficulty::*;
pub use music_data::*;
pub use song::*;
pub(crate) use song::song_id_from_any;
