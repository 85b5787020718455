//! Formatting helpers for presenting movie data.

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Genres as shown in the compact table: `剧情 爱情` -> `剧情 / 爱情`.
pub fn join_genres(genres: &str) -> String {
    genres.split_whitespace().collect::<Vec<_>>().join(" / ")
}

/// Cut `label` to `max_chars` characters and mark the cut with `...`.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    match label.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &label[..cut]),
        None => label.to_string(),
    }
}
