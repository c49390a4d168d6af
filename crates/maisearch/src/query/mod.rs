//! Query resolution.
//!
//! - `Resolver` - turns free text into an `Outcome` and serves the paged
//!   listing commands
//! - `ConstantQuery`, `BpmQuery`, `NameQuery` - command argument shapes
//! - `Outcome`, `TitleSearch`, `CoverTarget` - typed results for the caller to render

mod args;
mod outcome;
mod resolver;

pub use args::*;
pub use outcome::*;
pub use resolver::*;
