//! Text rendering for command results.

use std::fmt::Write as _;

use maisearch::{AliasCandidate, LevelRow, Page, Paged, PendingVote, SongMatch, SongRecord};

/// Full song card
pub fn song_card(song: &SongRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}. {} [{}]", song.id, song.title, song.chart_type.label());
    let _ = writeln!(out, "Artist:  {}", song.artist);
    let _ = writeln!(out, "Genre:   {}", song.genre);
    let _ = writeln!(out, "BPM:     {}", song.bpm);
    let new_marker = if song.is_new { " (new)" } else { "" };
    let _ = writeln!(out, "Version: {}{}", song.version, new_marker);

    let constants: Vec<String> = song
        .charts()
        .map(|(_, chart)| format!("{}({:.1})", chart.level, chart.constant))
        .collect();
    let _ = write!(out, "Levels:  {}", constants.join(" / "));
    out
}

/// One-line listing entry for a song
pub fn song_line(song: &SongRecord) -> String {
    format!("{}. {}", song.id, song.title)
}

pub fn candidate_lines(candidates: &[AliasCandidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("{}. {}", c.song_id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn vote_lines(votes: &[PendingVote]) -> String {
    votes
        .iter()
        .map(|v| format!("- {} -> {} (vote tag: {})", v.alias, v.song_id, v.tag))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn level_line(row: &LevelRow) -> String {
    format!(
        "{}. {} {} {:.1}",
        row.id,
        row.title,
        row.difficulty.display_name(),
        row.constant
    )
}

/// Listing entry with the difficulties whose charts matched
pub fn match_line(found: &SongMatch<'_>) -> String {
    let charts: Vec<String> = found
        .charts()
        .map(|(difficulty, chart)| format!("{} {}", difficulty.display_name(), chart.charter))
        .collect();
    format!("{} | {}", song_line(found.song), charts.join(", "))
}

fn footer(page: &Page) -> String {
    format!("Page {}/{}", page.page, page.total_pages)
}

/// Render a page of rows followed by the page footer
pub fn paged<T>(listing: &Paged<T>, line: impl Fn(&T) -> String) -> String {
    let mut out: Vec<String> = listing.rows.iter().map(line).collect();
    out.push(footer(&listing.page));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use maisearch::{Chart, Difficulty, paginate};

    fn make_song() -> SongRecord {
        SongRecord::new(
            "8",
            "True Love Song",
            vec![Chart::new(5.0, "5", "-"), Chart::new(7.5, "7+", "-")],
        )
        .unwrap()
        .with_artist("Kai")
        .with_bpm(150)
    }

    #[test]
    fn test_song_card() {
        let card = song_card(&make_song());
        assert!(card.starts_with("8. True Love Song [SD]"));
        assert!(card.contains("BPM:     150"));
        assert!(card.ends_with("Levels:  5(5.0) / 7+(7.5)"));
    }

    #[test]
    fn test_level_line() {
        let row = LevelRow {
            id: "8".into(),
            title: "True Love Song".into(),
            constant: 7.5,
            difficulty: Difficulty::ReMaster,
        };
        assert_eq!(level_line(&row), "8. True Love Song Re:Master 7.5");
    }

    #[test]
    fn test_paged_footer() {
        let listing = Paged {
            page: paginate(2, 25, 1),
            total: 2,
            rows: vec!["a", "b"],
        };
        assert_eq!(paged(&listing, |s| s.to_string()), "a\nb\nPage 1/1");
    }
}
