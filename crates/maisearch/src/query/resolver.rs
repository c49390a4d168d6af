use std::sync::Arc;

use tracing::{debug, warn};

use crate::alias::{AliasCandidate, AliasLookup, AliasProvider, AliasTable, normalize_alias};
use crate::catalog::{Catalog, LevelRow, SongMatch, sort_by_id};
use crate::chart::SongRecord;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::page::Paged;
use crate::query::{BpmQuery, ConstantQuery, CoverTarget, NameQuery, Outcome, TitleSearch};
use crate::session::GuessSessions;

/// Resolves user queries against the catalog and alias sources.
///
/// Free-text resolution tries, in order: local aliases, the remote alias
/// provider, id lookup, then title substring search.
pub struct Resolver<P> {
    catalog: Arc<Catalog>,
    aliases: Arc<AliasTable>,
    provider: P,
    sessions: Arc<GuessSessions>,
    search: SearchConfig,
}

impl<P> Resolver<P> {
    pub fn new(catalog: Arc<Catalog>, aliases: Arc<AliasTable>, provider: P) -> Self {
        Self {
            catalog,
            aliases,
            provider,
            sessions: Arc::new(GuessSessions::new()),
            search: SearchConfig::default(),
        }
    }

    /// Share guessing-game state owned by the caller
    pub fn with_sessions(mut self, sessions: Arc<GuessSessions>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn sessions(&self) -> &GuessSessions {
        &self.sessions
    }

    pub fn lookup_id(&self, id: &str) -> Option<&SongRecord> {
        self.catalog.by_id(id)
    }

    /// Title listing: a lone match is returned as is, otherwise id-sorted pages
    pub fn search_title(&self, name: &str, page: usize) -> Result<TitleSearch<'_>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let mut songs = self.catalog.title_search(name);
        Ok(match songs.len() {
            0 => TitleSearch::NotFound,
            1 => TitleSearch::Single(songs[0]),
            _ => {
                sort_by_id(&mut songs);
                TitleSearch::Paged(Paged::from_rows(songs, self.search.page_size, page))
            }
        })
    }

    /// Charts in a constant range, ordered by constant
    pub fn search_constant(&self, query: &ConstantQuery) -> Paged<LevelRow> {
        let rows = self.catalog.constant_rows(query.low, query.high);
        debug!(
            "Constant search {}..={} matched {} charts",
            query.low,
            query.high,
            rows.len()
        );
        Paged::from_rows(rows, self.search.page_size, query.page)
    }

    /// Songs by BPM, ascending. Refused while `scope` is guessing.
    pub fn search_bpm(&self, scope: Option<&str>, query: &BpmQuery) -> Result<Paged<&SongRecord>> {
        self.sessions.ensure_idle(scope)?;
        let songs = self.catalog.bpm_search(query.filter);
        Ok(Paged::from_rows(songs, self.search.page_size, query.page))
    }

    /// Songs by artist substring. Refused while `scope` is guessing.
    pub fn search_artist(
        &self,
        scope: Option<&str>,
        query: &NameQuery,
    ) -> Result<Paged<SongMatch<'_>>> {
        self.sessions.ensure_idle(scope)?;
        let matches = self.catalog.artist_search(&query.name);
        Ok(Paged::from_rows(matches, self.search.page_size, query.page))
    }

    /// Songs by charter substring, with the matching charts. Refused while
    /// `scope` is guessing.
    pub fn search_charter(
        &self,
        scope: Option<&str>,
        query: &NameQuery,
    ) -> Result<Paged<SongMatch<'_>>> {
        self.sessions.ensure_idle(scope)?;
        let matches = self.catalog.charter_search(&query.name);
        Ok(Paged::from_rows(matches, self.search.page_size, query.page))
    }

    /// Find the song a cover request names: id, exact title, then local alias
    pub fn cover_target(&self, text: &str) -> Result<CoverTarget> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyQuery);
        }

        if let Some(song) = self.catalog.by_id(text) {
            return Ok(CoverTarget::Song(song.id.to_string()));
        }
        if let Some(song) = self.catalog.by_title(text) {
            return Ok(CoverTarget::Song(song.id.to_string()));
        }

        let mut candidates = self.aliases.by_alias(text);
        Ok(match candidates.len() {
            0 => CoverTarget::NotFound,
            1 => CoverTarget::Song(candidates.remove(0).song_id),
            _ => CoverTarget::Ambiguous(candidates),
        })
    }

    /// Outcome for alias hits, or `None` when there were none
    fn from_candidates(&self, mut candidates: Vec<AliasCandidate>) -> Option<Outcome<'_>> {
        match candidates.len() {
            0 => None,
            1 => {
                let candidate = candidates.remove(0);
                Some(match self.catalog.by_id(&candidate.song_id) {
                    Some(song) => Outcome::SingleSong(song),
                    None => {
                        warn!(
                            "Alias points at song {} which is not in the catalog",
                            candidate.song_id
                        );
                        Outcome::NoMatch
                    }
                })
            }
            _ => Some(Outcome::MultipleSongs(candidates)),
        }
    }

    /// Numeric id or explicit `id<number>` lookup
    fn from_id(&self, text: &str) -> Option<Outcome<'_>> {
        if is_digits(text)
            && let Some(song) = self.catalog.by_id(text)
        {
            return Some(Outcome::SingleSong(song));
        }

        let id = text.strip_prefix("id")?.trim_start();
        if !is_digits(id) {
            return None;
        }
        Some(match self.catalog.by_id(id) {
            Some(song) => Outcome::SingleSong(song),
            None => Outcome::IdNotFound(id.to_string()),
        })
    }

    fn from_title(&self, text: &str) -> Outcome<'_> {
        let mut songs = self.catalog.title_search(text);
        match songs.len() {
            0 => Outcome::NoMatch,
            1 => Outcome::SingleSong(songs[0]),
            n if n >= self.search.too_many_threshold => Outcome::TooMany(n),
            _ => {
                sort_by_id(&mut songs);
                Outcome::MultipleSongs(
                    songs
                        .into_iter()
                        .map(|s| AliasCandidate::new(s.id.to_string(), s.title.to_string()))
                        .collect(),
                )
            }
        }
    }
}

impl<P: AliasProvider> Resolver<P> {
    /// Resolve free text to a song
    pub async fn resolve(&self, raw: &str) -> Result<Outcome<'_>> {
        let text = normalize_alias(raw);
        if text.is_empty() {
            return Err(Error::EmptyQuery);
        }

        if let Some(outcome) = self.from_candidates(self.aliases.by_alias(&text)) {
            debug!("Resolved {:?} through local aliases", text);
            return Ok(outcome);
        }

        match self.provider.lookup(&text).await {
            Ok(AliasLookup::PendingVotes(votes)) if !votes.is_empty() => {
                debug!("Alias {:?} has {} pending votes", text, votes.len());
                return Ok(Outcome::PendingVotes(votes));
            }
            Ok(AliasLookup::PendingVotes(_)) => {}
            Ok(AliasLookup::Songs(candidates)) => {
                if let Some(outcome) = self.from_candidates(candidates) {
                    debug!("Resolved {:?} through the alias service", text);
                    return Ok(outcome);
                }
            }
            Err(Error::AliasNotFound(_)) => {}
            Err(e) => warn!("Alias lookup for {:?} failed: {}", text, e),
        }

        if let Some(outcome) = self.from_id(&text) {
            return Ok(outcome);
        }

        Ok(self.from_title(&text))
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
