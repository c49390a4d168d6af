use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::chart::Difficulty;
use crate::config::search::UTILITY_ID_FLOOR;
use crate::error::{Error, Result};

/// Chart flavour: standard or deluxe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    #[serde(rename = "SD")]
    Standard,
    #[serde(rename = "DX")]
    Deluxe,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "SD",
            Self::Deluxe => "DX",
        }
    }
}

/// Accept song ids written either as numbers or strings
pub(crate) fn song_id_from_any<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyId {
        Text(String),
        Number(u64),
    }

    Ok(match AnyId::deserialize(deserializer)? {
        AnyId::Text(s) => s.trim().to_string(),
        AnyId::Number(n) => n.to_string(),
    })
}

/// Per-difficulty chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    /// Difficulty constant (e.g. 13.7)
    pub constant: f64,
    /// Displayed level label (e.g. "13+")
    pub level: Arc<str>,
    pub charter: Arc<str>,
    pub notes: Vec<u32>,
}

impl Chart {
    pub fn new(constant: f64, level: impl Into<Arc<str>>, charter: impl Into<Arc<str>>) -> Self {
        Self {
            constant,
            level: level.into(),
            charter: charter.into(),
            notes: Vec::new(),
        }
    }

    pub fn total_notes(&self) -> u32 {
        self.notes.iter().sum()
    }
}

/// One catalog song with its charts.
///
/// Charts are stored in difficulty order starting at BASIC, so a record with
/// four charts has BASIC..MASTER and one with five also has RE:MASTER.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRecord {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub artist: Arc<str>,
    pub genre: Arc<str>,
    pub bpm: u32,
    pub chart_type: ChartType,
    /// Game version the song was introduced in
    pub version: Arc<str>,
    pub is_new: bool,
    charts: Vec<Chart>,
}

impl SongRecord {
    /// Create a record, rejecting chart lists that are empty or longer than
    /// the number of difficulty tiers.
    pub fn new(
        id: impl Into<Arc<str>>,
        title: impl Into<Arc<str>>,
        charts: Vec<Chart>,
    ) -> Result<Self> {
        let id = id.into();
        if charts.is_empty() {
            return Err(Error::InvalidCatalog {
                id: id.to_string(),
                message: "song has no charts".to_string(),
            });
        }
        if charts.len() > Difficulty::COUNT {
            return Err(Error::InvalidCatalog {
                id: id.to_string(),
                message: format!("song has {} charts", charts.len()),
            });
        }

        Ok(Self {
            id,
            title: title.into(),
            artist: Arc::from(""),
            genre: Arc::from(""),
            bpm: 0,
            chart_type: ChartType::default(),
            version: Arc::from(""),
            is_new: false,
            charts,
        })
    }

    pub fn with_artist(mut self, artist: impl Into<Arc<str>>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<Arc<str>>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_bpm(mut self, bpm: u32) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn with_version(mut self, version: impl Into<Arc<str>>, is_new: bool) -> Self {
        self.version = version.into();
        self.is_new = is_new;
        self
    }

    /// Difficulties present for this song, in tier order
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        (0..self.charts.len()).filter_map(Difficulty::from_index)
    }

    pub fn chart_for(&self, difficulty: Difficulty) -> Option<&Chart> {
        self.charts.get(difficulty.index())
    }

    pub fn charts(&self) -> impl Iterator<Item = (Difficulty, &Chart)> + '_ {
        self.difficulties().zip(self.charts.iter())
    }

    pub fn numeric_id(&self) -> Option<u32> {
        self.id.parse().ok()
    }

    /// Whether the id falls inside the regular catalog range.
    ///
    /// Ids at or above 100000 (and non-numeric ids) are utility entries.
    pub fn is_standard(&self) -> bool {
        self.numeric_id().is_some_and(|id| id < UTILITY_ID_FLOOR)
    }

    /// Sort key that orders numeric ids numerically and puts the rest last.
    pub(crate) fn id_sort_key(&self) -> (u32, &str) {
        (self.numeric_id().unwrap_or(u32::MAX), &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_song(id: &str, constants: &[f64]) -> SongRecord {
        let charts = constants
            .iter()
            .map(|&c| Chart::new(c, format!("{}", c.floor()), "-"))
            .collect();
        SongRecord::new(id, "Test Song", charts).unwrap()
    }

    #[test]
    fn test_song_requires_charts() {
        let err = SongRecord::new("8", "Empty", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog { .. }));
    }

    #[test]
    fn test_song_rejects_too_many_charts() {
        let charts = vec![Chart::default(); 6];
        assert!(SongRecord::new("8", "Six", charts).is_err());
    }

    #[test]
    fn test_difficulties_follow_chart_count() {
        let song = make_test_song("8", &[3.0, 6.0, 9.5, 12.7]);
        let diffs: Vec<_> = song.difficulties().collect();
        assert_eq!(
            diffs,
            vec![
                Difficulty::Basic,
                Difficulty::Advanced,
                Difficulty::Expert,
                Difficulty::Master
            ]
        );
        assert!(song.chart_for(Difficulty::ReMaster).is_none());
        assert_eq!(song.chart_for(Difficulty::Master).unwrap().constant, 12.7);
    }

    #[test]
    fn test_every_difficulty_has_chart() {
        let song = make_test_song("8", &[3.0, 6.0, 9.5, 12.7, 13.4]);
        for difficulty in song.difficulties() {
            assert!(song.chart_for(difficulty).is_some());
        }
        assert_eq!(song.charts().count(), 5);
    }

    #[test]
    fn test_standard_id_range() {
        assert!(make_test_song("99999", &[1.0]).is_standard());
        assert!(!make_test_song("100000", &[1.0]).is_standard());
        assert!(!make_test_song("abc", &[1.0]).is_standard());
    }

    #[test]
    fn test_total_notes() {
        let mut chart = Chart::new(13.0, "13", "someone");
        chart.notes = vec![300, 50, 40, 20, 10];
        assert_eq!(chart.total_notes(), 420);
    }
}
