//! CLI command implementations.
//!
//! Each command parses its raw arguments through the library and prints the
//! rendered result to stdout.

pub mod aliases;
pub mod artist;
pub mod base;
pub mod bpm;
pub mod charter;
pub mod cover;
pub mod id;
pub mod output;
pub mod search;
pub mod what;
