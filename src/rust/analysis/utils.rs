/// Splits batch input into reviews: one per line, trimmed, blank lines dropped.
/// Order is preserved.
pub fn split_reviews(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Client-side "Text Length": whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `round(p * 100)` for a probability in `[0, 1]`. Each value is rounded on
/// its own, so a pair may display as 99% or 101%.
pub fn percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

/// CSS width for a probability bar, e.g. `"87%"` or `"12.5%"`.
pub(crate) fn bar_width(probability: f64) -> String {
    let width = ((probability * 100.0).clamp(0.0, 100.0) * 10.0).round() / 10.0;
    if width.fract() == 0.0 {
        format!("{:.0}%", width)
    } else {
        format!("{:.1}%", width)
    }
}
