use crate::alias::{AliasCandidate, PendingVote};
use crate::chart::SongRecord;
use crate::page::Paged;

/// Result of resolving free text to a song
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    NoMatch,
    SingleSong(&'a SongRecord),
    /// Several candidates; the user has to pick one by id
    MultipleSongs(Vec<AliasCandidate>),
    /// The alias is only known as an open proposal
    PendingVotes(Vec<PendingVote>),
    /// Title matches at or above the listing threshold
    TooMany(usize),
    /// An explicit `id<number>` query named an id the catalog lacks
    IdNotFound(String),
}

/// Result of the title search listing
#[derive(Debug, Clone)]
pub enum TitleSearch<'a> {
    NotFound,
    Single(&'a SongRecord),
    Paged(Paged<&'a SongRecord>),
}

/// Which jacket a cover request refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverTarget {
    Song(String),
    Ambiguous(Vec<AliasCandidate>),
    NotFound,
}
