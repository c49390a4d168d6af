use serde::Serialize;

use crate::chart::{Chart, ChartType, Difficulty, SongRecord};

/// BPM predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpmFilter {
    Exact(u32),
    /// Inclusive range
    Range(u32, u32),
}

impl BpmFilter {
    pub fn matches(&self, bpm: u32) -> bool {
        match *self {
            BpmFilter::Exact(value) => bpm == value,
            BpmFilter::Range(low, high) => (low..=high).contains(&bpm),
        }
    }
}

/// A single catalog predicate; lists of filters combine with AND.
///
/// Substring and genre comparisons ignore case.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    TitleSearch(String),
    ArtistSearch(String),
    /// Matches when any chart's charter contains the text
    CharterSearch(String),
    /// Inclusive constant range over charts
    ConstantRange { low: f64, high: f64 },
    Bpm(BpmFilter),
    /// Exact level label such as `13+`
    Level(String),
    Genre(String),
    ChartType(ChartType),
}

impl Filter {
    /// Whether this predicate is evaluated per chart rather than per song
    fn is_chart_level(&self) -> bool {
        matches!(
            self,
            Filter::CharterSearch(_) | Filter::ConstantRange { .. } | Filter::Level(_)
        )
    }

    fn matches_song(&self, song: &SongRecord) -> bool {
        match self {
            Filter::TitleSearch(text) => contains_ignore_case(&song.title, text),
            Filter::ArtistSearch(text) => contains_ignore_case(&song.artist, text),
            Filter::Bpm(bpm) => bpm.matches(song.bpm),
            Filter::Genre(genre) => song.genre.to_lowercase() == genre.trim().to_lowercase(),
            Filter::ChartType(chart_type) => song.chart_type == *chart_type,
            Filter::CharterSearch(_) | Filter::ConstantRange { .. } | Filter::Level(_) => true,
        }
    }

    fn matches_chart(&self, chart: &Chart) -> bool {
        match self {
            Filter::CharterSearch(text) => contains_ignore_case(&chart.charter, text),
            Filter::ConstantRange { low, high } => *low <= chart.constant && chart.constant <= *high,
            Filter::Level(level) => &*chart.level == level.trim(),
            _ => true,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A song that passed a filter set, with the difficulties whose charts
/// satisfied the chart-level predicates (every difficulty when there were none)
#[derive(Debug, Clone, Serialize)]
pub struct SongMatch<'a> {
    pub song: &'a SongRecord,
    pub difficulties: Vec<Difficulty>,
}

impl<'a> SongMatch<'a> {
    pub(crate) fn evaluate(song: &'a SongRecord, filters: &[Filter]) -> Option<Self> {
        if !filters.iter().all(|f| f.matches_song(song)) {
            return None;
        }

        let chart_filters: Vec<&Filter> = filters.iter().filter(|f| f.is_chart_level()).collect();
        let difficulties: Vec<Difficulty> = song
            .charts()
            .filter(|(_, chart)| chart_filters.iter().all(|f| f.matches_chart(chart)))
            .map(|(difficulty, _)| difficulty)
            .collect();

        if difficulties.is_empty() {
            return None;
        }
        Some(Self { song, difficulties })
    }

    /// Matched difficulties paired with their charts
    pub fn charts(&self) -> impl Iterator<Item = (Difficulty, &'a Chart)> + '_ {
        self.difficulties
            .iter()
            .filter_map(|&d| self.song.chart_for(d).map(|chart| (d, chart)))
    }
}

/// Access to the song behind a search result
pub trait AsSong {
    fn song(&self) -> &SongRecord;
}

impl AsSong for &SongRecord {
    fn song(&self) -> &SongRecord {
        self
    }
}

impl AsSong for SongMatch<'_> {
    fn song(&self) -> &SongRecord {
        self.song
    }
}

/// Sort results by numeric song id
pub fn sort_by_id<T: AsSong>(items: &mut [T]) {
    items.sort_by(|a, b| a.song().id_sort_key().cmp(&b.song().id_sort_key()));
}

/// Sort results by ascending BPM, ties broken by id
pub fn sort_by_bpm<T: AsSong>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.song()
            .bpm
            .cmp(&b.song().bpm)
            .then_with(|| a.song().id_sort_key().cmp(&b.song().id_sort_key()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_song() -> SongRecord {
        SongRecord::new(
            "100",
            "Oshama Scramble!",
            vec![
                Chart::new(4.0, "4", "-"),
                Chart::new(7.5, "7+", "-"),
                Chart::new(10.8, "10+", "Jack"),
                Chart::new(13.3, "13", "Techno Kitchen"),
            ],
        )
        .unwrap()
        .with_artist("t+pazolite")
        .with_genre("maimai")
        .with_bpm(190)
    }

    #[test]
    fn test_bpm_filter() {
        assert!(BpmFilter::Exact(190).matches(190));
        assert!(!BpmFilter::Exact(190).matches(191));
        assert!(BpmFilter::Range(180, 190).matches(180));
        assert!(BpmFilter::Range(180, 190).matches(190));
        assert!(!BpmFilter::Range(180, 190).matches(191));
    }

    #[test]
    fn test_song_level_filters_keep_all_difficulties() {
        let song = make_song();
        let m = SongMatch::evaluate(&song, &[Filter::TitleSearch("SCRAMBLE".into())]).unwrap();
        assert_eq!(m.difficulties.len(), 4);
    }

    #[test]
    fn test_charter_filter_records_matching_difficulties() {
        let song = make_song();
        let m = SongMatch::evaluate(&song, &[Filter::CharterSearch("kitchen".into())]).unwrap();
        assert_eq!(m.difficulties, vec![Difficulty::Master]);
        let (_, chart) = m.charts().next().unwrap();
        assert_eq!(&*chart.charter, "Techno Kitchen");
    }

    #[test]
    fn test_chart_filters_intersect() {
        let song = make_song();
        let filters = [
            Filter::CharterSearch("-".into()),
            Filter::ConstantRange { low: 7.0, high: 14.0 },
        ];
        let m = SongMatch::evaluate(&song, &filters).unwrap();
        assert_eq!(m.difficulties, vec![Difficulty::Advanced]);
    }

    #[test]
    fn test_no_matching_chart_rejects_song() {
        let song = make_song();
        let filters = [Filter::ConstantRange { low: 14.0, high: 15.0 }];
        assert!(SongMatch::evaluate(&song, &filters).is_none());
    }

    #[test]
    fn test_level_and_genre_filters() {
        let song = make_song();
        let m = SongMatch::evaluate(
            &song,
            &[Filter::Level("10+".into()), Filter::Genre("MAIMAI".into())],
        )
        .unwrap();
        assert_eq!(m.difficulties, vec![Difficulty::Expert]);
        assert!(SongMatch::evaluate(&song, &[Filter::ChartType(ChartType::Deluxe)]).is_none());
    }
}
