use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alias::{AliasCandidate, normalize_alias};
use crate::chart::song_id_from_any;
use crate::error::Result;

/// One song's alias list as stored in the alias file.
///
/// Format: `[{"SongID": 8, "Name": "True Love Song", "Alias": ["tls", "..."]}]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    #[serde(rename = "SongID", deserialize_with = "song_id_from_any")]
    pub song_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Alias", default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Default)]
struct AliasIndex {
    /// Normalized alias -> candidates in registration order
    by_alias: HashMap<String, Vec<AliasCandidate>>,
    /// Song id -> aliases in registration order
    by_song: HashMap<String, Vec<String>>,
}

/// Local alias index.
///
/// Writers are serialized by the lock; readers get owned copies, so a
/// lookup never observes a half-applied addition.
#[derive(Debug, Default)]
pub struct AliasTable {
    index: RwLock<AliasIndex>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = AliasRecord>) -> Self {
        let table = Self::new();
        {
            let mut index = table.index.write();
            for record in records {
                for alias in &record.aliases {
                    insert(&mut index, &record.song_id, &record.name, alias);
                }
            }
        }
        table
    }

    /// Parse an alias file document
    pub fn parse(json: &str) -> Result<Self> {
        let records: Vec<AliasRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load an alias file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let table = Self::parse(&content)?;
        info!(
            "Loaded {} aliases from {:?}",
            table.alias_count(),
            path.as_ref()
        );
        Ok(table)
    }

    /// Candidates registered under the alias, in registration order
    pub fn by_alias(&self, text: &str) -> Vec<AliasCandidate> {
        let key = normalize_alias(text);
        if key.is_empty() {
            return Vec::new();
        }
        self.index
            .read()
            .by_alias
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Register `alias_text` for a song. Repeated registrations are kept.
    pub fn add_alias(&self, song_id: &str, name: &str, alias_text: &str) {
        if normalize_alias(alias_text).is_empty() {
            debug!("Ignoring blank alias for song {}", song_id);
            return;
        }
        let mut index = self.index.write();
        insert(&mut index, song_id, name, alias_text);
    }

    /// Aliases registered for a song
    pub fn aliases_of(&self, song_id: &str) -> Vec<String> {
        self.index
            .read()
            .by_song
            .get(song_id.trim())
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct normalized aliases
    pub fn alias_count(&self) -> usize {
        self.index.read().by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_count() == 0
    }
}

fn insert(index: &mut AliasIndex, song_id: &str, name: &str, alias_text: &str) {
    let key = normalize_alias(alias_text);
    if key.is_empty() {
        return;
    }
    index
        .by_alias
        .entry(key)
        .or_default()
        .push(AliasCandidate::new(song_id.trim(), name));
    index
        .by_song
        .entry(song_id.trim().to_string())
        .or_default()
        .push(alias_text.trim().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"SongID": 8, "Name": "True Love Song", "Alias": ["TLS", "真爱之歌"]},
        {"SongID": "11663", "Name": "Love or Lies", "Alias": ["lol"]},
        {"SongID": 17, "Name": "League of Legends", "Alias": ["LoL"]}
    ]"#;

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let table = AliasTable::parse(SAMPLE).unwrap();
        assert_eq!(table.by_alias(" TLS "), table.by_alias("tls"));
        assert_eq!(table.by_alias("tls")[0].song_id, "8");
    }

    #[test]
    fn test_alias_with_multiple_candidates_keeps_order() {
        let table = AliasTable::parse(SAMPLE).unwrap();
        let hits = table.by_alias("LOL");
        let ids: Vec<&str> = hits.iter().map(|c| c.song_id.as_str()).collect();
        assert_eq!(ids, vec!["11663", "17"]);
    }

    #[test]
    fn test_unknown_and_blank_alias() {
        let table = AliasTable::parse(SAMPLE).unwrap();
        assert!(table.by_alias("nothing").is_empty());
        assert!(table.by_alias("   ").is_empty());
    }

    #[test]
    fn test_add_alias_tolerates_duplicates() {
        let table = AliasTable::new();
        table.add_alias("8", "True Love Song", "Classic");
        table.add_alias("8", "True Love Song", "classic ");
        assert_eq!(table.by_alias("CLASSIC").len(), 2);
        assert_eq!(table.alias_count(), 1);
    }

    #[test]
    fn test_add_blank_alias_is_ignored() {
        let table = AliasTable::new();
        table.add_alias("8", "True Love Song", "  ");
        assert!(table.is_empty());
        assert!(table.aliases_of("8").is_empty());
    }

    #[test]
    fn test_aliases_of_song() {
        let table = AliasTable::parse(SAMPLE).unwrap();
        assert_eq!(table.aliases_of("8"), vec!["TLS", "真爱之歌"]);
        assert!(table.aliases_of("999").is_empty());
    }

    #[test]
    fn test_concurrent_additions() {
        let table = std::sync::Arc::new(AliasTable::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let table = table.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        table.add_alias(&format!("{}", i), "song", &format!("alias{}", j));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.alias_count(), 25);
        assert_eq!(table.by_alias("alias0").len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        fs::write(&path, SAMPLE).unwrap();

        let table = AliasTable::load(&path).unwrap();
        assert_eq!(table.alias_count(), 3);
    }
}
