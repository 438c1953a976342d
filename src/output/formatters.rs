//! Formatting utilities for terminal output

/// Spread a pattern out for display, `-e--` becomes `- e - -`
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a win rate as a bar over 0-100%
#[must_use]
pub fn win_rate_bar(rate: f64, width: usize) -> String {
    create_progress_bar(rate, 1.0, width)
}
