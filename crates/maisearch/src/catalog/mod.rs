//! In-memory song catalog.
//!
//! The catalog is built once from the loaded records and never mutated
//! afterwards, so it can be shared behind an `Arc` without locking.
//! Exact lookups go through hash indexes; every filter is a linear scan.

mod filter;
mod level;

pub use filter::*;
pub use level::*;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::chart::{SongRecord, load_music_data};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<SongRecord>,
    by_id: HashMap<Arc<str>, usize>,
    /// Lower-cased title -> first song carrying it
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog. Records repeating an earlier id are dropped.
    pub fn new(records: Vec<SongRecord>) -> Self {
        let mut songs = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_title = HashMap::with_capacity(records.len());

        for song in records {
            match by_id.entry(song.id.clone()) {
                Entry::Occupied(_) => {
                    warn!("Duplicate song id {} ({}), keeping the first", song.id, song.title);
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(songs.len());
                }
            }
            by_title
                .entry(song.title.to_lowercase())
                .or_insert(songs.len());
            songs.push(song);
        }

        Self {
            songs,
            by_id,
            by_title,
        }
    }

    /// Load and index a `music_data.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog = Self::new(load_music_data(path)?);
        info!("Catalog ready with {} songs", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &SongRecord> {
        self.songs.iter()
    }

    pub fn by_id(&self, id: &str) -> Option<&SongRecord> {
        self.by_id.get(id.trim()).map(|&i| &self.songs[i])
    }

    /// Exact title lookup, ignoring case
    pub fn by_title(&self, title: &str) -> Option<&SongRecord> {
        self.by_title
            .get(&title.trim().to_lowercase())
            .map(|&i| &self.songs[i])
    }

    /// Apply a filter set, preserving catalog order
    pub fn filter(&self, filters: &[Filter]) -> Vec<SongMatch<'_>> {
        self.songs
            .iter()
            .filter_map(|song| SongMatch::evaluate(song, filters))
            .collect()
    }

    /// Case-insensitive title substring search in catalog order
    pub fn title_search(&self, text: &str) -> Vec<&SongRecord> {
        self.songs_matching(Filter::TitleSearch(text.to_string()))
    }

    pub fn artist_search(&self, text: &str) -> Vec<SongMatch<'_>> {
        self.filter(&[Filter::ArtistSearch(text.to_string())])
    }

    pub fn charter_search(&self, text: &str) -> Vec<SongMatch<'_>> {
        self.filter(&[Filter::CharterSearch(text.to_string())])
    }

    /// Songs matching the BPM predicate, ascending by BPM
    pub fn bpm_search(&self, bpm: BpmFilter) -> Vec<&SongRecord> {
        let mut songs = self.songs_matching(Filter::Bpm(bpm));
        sort_by_bpm(&mut songs);
        songs
    }

    fn songs_matching(&self, filter: Filter) -> Vec<&SongRecord> {
        self.filter(std::slice::from_ref(&filter))
            .into_iter()
            .map(|m| m.song)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;

    fn song(id: &str, title: &str, bpm: u32) -> SongRecord {
        SongRecord::new(id, title, vec![Chart::new(5.0, "5", "-")])
            .unwrap()
            .with_bpm(bpm)
    }

    fn make_catalog() -> Catalog {
        Catalog::new(vec![
            song("8", "True Love Song", 150),
            song("17", "Love or Lies", 185),
            song("8", "Duplicate Id", 120),
            song("110", "love or lies", 160),
        ])
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let catalog = make_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(&*catalog.by_id("8").unwrap().title, "True Love Song");
    }

    #[test]
    fn test_by_id_trims_input() {
        let catalog = make_catalog();
        assert!(catalog.by_id(" 17 ").is_some());
        assert!(catalog.by_id("9").is_none());
    }

    #[test]
    fn test_by_title_ignores_case_first_wins() {
        let catalog = make_catalog();
        let found = catalog.by_title("LOVE OR LIES").unwrap();
        assert_eq!(&*found.id, "17");
    }

    #[test]
    fn test_title_search_preserves_catalog_order() {
        let catalog = make_catalog();
        let ids: Vec<&str> = catalog
            .title_search("love")
            .iter()
            .map(|s| &*s.id)
            .collect();
        assert_eq!(ids, vec!["8", "17", "110"]);
    }

    #[test]
    fn test_bpm_search_sorted() {
        let catalog = make_catalog();
        let bpms: Vec<u32> = catalog
            .bpm_search(BpmFilter::Range(100, 200))
            .iter()
            .map(|s| s.bpm)
            .collect();
        assert_eq!(bpms, vec![150, 160, 185]);
        assert_eq!(catalog.bpm_search(BpmFilter::Exact(160)).len(), 1);
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("music_data.json");
        std::fs::write(
            &path,
            r#"[{"id": "8", "title": "True Love Song", "ds": [5.0], "basic_info": {"bpm": 150}}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.by_title("true love song").unwrap().bpm, 150);
    }
}
