use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, Filter};
use crate::chart::Difficulty;

/// One chart in a constant-range listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelRow {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub constant: f64,
    pub difficulty: Difficulty,
}

impl Catalog {
    /// Every chart whose constant lies in `[low, high]`, one row per chart.
    ///
    /// Utility entries (id >= 100000) never appear. Rows are ordered by
    /// constant, then id, then difficulty.
    pub fn constant_rows(&self, low: f64, high: f64) -> Vec<LevelRow> {
        let mut rows: Vec<LevelRow> = self
            .filter(&[Filter::ConstantRange { low, high }])
            .into_iter()
            .filter(|m| m.song.is_standard())
            .flat_map(|m| {
                m.charts()
                    .map(|(difficulty, chart)| LevelRow {
                        id: m.song.id.clone(),
                        title: m.song.title.clone(),
                        constant: chart.constant,
                        difficulty,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        rows.sort_by(|a, b| {
            a.constant
                .total_cmp(&b.constant)
                .then_with(|| numeric(&a.id).cmp(&numeric(&b.id)))
                .then_with(|| a.difficulty.cmp(&b.difficulty))
        });
        rows
    }
}

fn numeric(id: &str) -> u32 {
    id.parse().unwrap_or(u32::MAX)
}
