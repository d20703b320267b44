/// Formats a ratio for display as a percentage with two decimals.
///
/// This is the single formatter behind every percentage column: skater
/// shooting percentage and the two team goal percentages. An undefined
/// (or non-finite) ratio is shown as `"0.00%"`.
///
/// # Examples
///
/// ```
/// use nhl_stats::data_fetcher::processors::format_percentage;
///
/// assert_eq!(format_percentage(Some(0.13333)), "13.33%");
/// assert_eq!(format_percentage(None), "0.00%");
/// ```
pub fn format_percentage(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) if value.is_finite() => format!("{:.2}%", value * 100.0),
        _ => "0.00%".to_string(),
    }
}

/// Joins first and last name with a single space, skipping missing parts.
pub fn full_name(first: &str, last: &str) -> String {
    match (first.trim(), last.trim()) {
        ("", last) => last.to_string(),
        (first, "") => first.to_string(),
        (first, last) => format!("{first} {last}"),
    }
}

/// Scoreboard score as `"home - away"`, empty before the puck drops.
pub fn format_score(home: Option<u32>, away: Option<u32>) -> String {
    match (home, away) {
        (Some(home), Some(away)) => format!("{home} - {away}"),
        _ => String::new(),
    }
}

/// Win-loss record as `"wins - losses"`
pub fn format_record(wins: u32, losses: u32) -> String {
    format!("{wins} - {losses}")
}
