//! Loader for the `music_data.json` catalog dump.
//!
//! The dump is a JSON array where every element carries per-difficulty
//! arrays (`ds`, `level`, `charts`) indexed from BASIC upwards:
//!
//! ```json
//! [{"id": "8", "title": "True Love Song", "type": "SD",
//!   "ds": [5.0, 7.0, 10.0, 12.0], "level": ["5", "7", "10", "12"],
//!   "charts": [{"notes": [63, 23, 8, 0], "charter": "-"}, ...],
//!   "basic_info": {"title": "True Love Song", "artist": "Kai/...",
//!                  "genre": "maimai", "bpm": 150, "from": "maimai", "is_new": false}}]
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::chart::{Chart, ChartType, SongRecord, song_id_from_any};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct RawMusic {
    #[serde(deserialize_with = "song_id_from_any")]
    id: String,
    title: String,
    #[serde(rename = "type", default)]
    chart_type: String,
    #[serde(default)]
    ds: Vec<f64>,
    #[serde(default)]
    level: Vec<String>,
    #[serde(default)]
    charts: Vec<RawChart>,
    #[serde(default)]
    basic_info: RawBasicInfo,
}

#[derive(Debug, Default, Deserialize)]
struct RawChart {
    #[serde(default)]
    notes: Vec<u32>,
    #[serde(default)]
    charter: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawBasicInfo {
    #[serde(default)]
    artist: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    bpm: f64,
    #[serde(rename = "from", default)]
    version: String,
    #[serde(default)]
    is_new: bool,
}

impl RawMusic {
    fn into_record(self) -> Result<SongRecord> {
        let mut raw_charts = self.charts.into_iter();
        let charts = self
            .ds
            .iter()
            .enumerate()
            .map(|(i, &constant)| {
                let raw = raw_charts.next().unwrap_or_default();
                Chart {
                    constant,
                    level: self
                        .level
                        .get(i)
                        .map(|l| Arc::from(l.as_str()))
                        .unwrap_or_else(|| Arc::from("")),
                    charter: Arc::from(raw.charter.as_str()),
                    notes: raw.notes,
                }
            })
            .collect();

        let chart_type = if self.chart_type.eq_ignore_ascii_case("DX") {
            ChartType::Deluxe
        } else {
            ChartType::Standard
        };

        let bpm = if self.basic_info.bpm.is_finite() && self.basic_info.bpm > 0.0 {
            self.basic_info.bpm.round() as u32
        } else {
            0
        };

        Ok(SongRecord::new(self.id, self.title, charts)?
            .with_artist(self.basic_info.artist)
            .with_genre(self.basic_info.genre)
            .with_bpm(bpm)
            .with_chart_type(chart_type)
            .with_version(self.basic_info.version, self.basic_info.is_new))
    }
}

/// Parse catalog records from a `music_data.json` document.
///
/// Entries that break the record invariants (no charts, too many charts)
/// are logged and skipped; a malformed document is an error.
pub fn parse_music_data(json: &str) -> Result<Vec<SongRecord>> {
    let raw: Vec<RawMusic> = serde_json::from_str(json)?;
    let total = raw.len();

    let songs: Vec<SongRecord> = raw
        .into_iter()
        .filter_map(|music| match music.into_record() {
            Ok(song) => Some(song),
            Err(e) => {
                warn!("Skipping catalog entry: {}", e);
                None
            }
        })
        .collect();

    if songs.len() != total {
        info!("Parsed {} of {} catalog entries", songs.len(), total);
    }
    Ok(songs)
}

/// Load catalog records from a `music_data.json` file
pub fn load_music_data<P: AsRef<Path>>(path: P) -> Result<Vec<SongRecord>> {
    let content = fs::read_to_string(path.as_ref())?;
    let songs = parse_music_data(&content)?;
    info!("Loaded {} songs from {:?}", songs.len(), path.as_ref());
    Ok(songs)
}
