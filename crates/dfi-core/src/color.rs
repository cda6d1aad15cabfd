//! ANSI decoration for percentage bands and image tags.

use crossterm::style::{Color, Stylize};
use dfi_common::types::PercentageBand;

/// Color used for the tag part of image names.
pub const TAG_COLOR: Color = Color::Yellow;

/// Foreground color of a band.
#[must_use]
pub const fn band_color(band: PercentageBand) -> Color {
    match band {
        PercentageBand::Normal => Color::Green,
        PercentageBand::Warning => Color::Yellow,
        PercentageBand::Critical => Color::Red,
    }
}

/// Wraps `text` in the escape codes of the band's color.
#[must_use]
pub fn colorize(text: &str, band: PercentageBand) -> String {
    text.with(band_color(band)).to_string()
}

/// Highlights the tag of an image reference.
///
/// The tag is whatever follows the last `:`. References without a colon are
/// returned unchanged.
#[must_use]
pub fn highlight_tag(image: &str) -> String {
    match image.rsplit_once(':') {
        Some((repository, tag)) => format!("{repository}:{}", tag.with(TAG_COLOR)),
        None => image.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_uses_band_color() {
        assert_eq!(colorize("5%", PercentageBand::Normal), "5%".green().to_string());
        assert_eq!(colorize("15%", PercentageBand::Warning), "15%".yellow().to_string());
        assert_eq!(colorize("50%", PercentageBand::Critical), "50%".red().to_string());
    }

    #[test]
    fn highlight_tag_with_one_colon() {
        assert_eq!(
            highlight_tag("abc/def:latest"),
            format!("abc/def:{}", "latest".yellow())
        );
    }

    #[test]
    fn highlight_tag_colors_only_after_last_colon() {
        assert_eq!(
            highlight_tag("abc:5000/def:v1.2.3"),
            format!("abc:5000/def:{}", "v1.2.3".yellow())
        );
    }

    #[test]
    fn highlight_tag_without_colon_is_unchanged() {
        assert_eq!(highlight_tag("abc/def"), "abc/def");
    }
}
