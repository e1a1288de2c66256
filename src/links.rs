//! External reference and discussion links for series and episodes.

use crate::types::SeriesData;
use regex::Regex;
use std::sync::OnceLock;
use urlencoding::encode;

const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";

/// A named external link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub name: &'static str,
    pub url: String,
}

fn imdb_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^tt\d+$").expect("valid IMDb id pattern"))
}

/// The series' IMDb id, if it looks like a real title id ("tt" + digits).
pub fn valid_imdb_id(series: &SeriesData) -> Option<&str> {
    series
        .imdb_id
        .as_deref()
        .filter(|id| imdb_id_pattern().is_match(id))
}

fn google_search(query: &str) -> String {
    format!("{}{}", GOOGLE_SEARCH, encode(query))
}

/// Links to outside sites for the series as a whole.
pub fn series_links(series: &SeriesData) -> Vec<ExternalLink> {
    let title = encode(&series.title);

    let imdb = match valid_imdb_id(series) {
        Some(id) => format!("https://www.imdb.com/title/{}/", id),
        None => format!("https://www.imdb.com/find?q={}", title),
    };

    vec![
        ExternalLink {
            name: "IMDb",
            url: imdb,
        },
        ExternalLink {
            name: "Reddit",
            url: google_search(&format!("site:reddit.com {} discussion", series.title)),
        },
        ExternalLink {
            name: "Letterboxd",
            url: format!("https://letterboxd.com/search/{}/", title),
        },
        ExternalLink {
            name: "Rotten Tomatoes",
            url: format!("https://www.rottentomatoes.com/search?search={}", title),
        },
    ]
}

/// Search for Reddit discussion threads about one episode.
pub fn episode_discussion_url(
    series: &SeriesData,
    season_number: i64,
    episode_number: i64,
) -> String {
    google_search(&format!(
        "site:reddit.com {} season {} episode {} discussion",
        series.title, season_number, episode_number
    ))
}

/// IMDb page for the episode's season, or a search when the id is unknown.
pub fn episode_reference_url(
    series: &SeriesData,
    season_number: i64,
    episode_number: i64,
) -> String {
    match valid_imdb_id(series) {
        Some(id) => format!(
            "https://www.imdb.com/title/{}/episodes?season={}",
            id, season_number
        ),
        None => google_search(&format!(
            "{} season {} episode {} imdb",
            series.title, season_number, episode_number
        )),
    }
}
