//! Text layout helpers shared by the renderers.

/// A horizontal rule of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// `text` preceded by enough spaces to centre it within `width` columns.
pub fn centered(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}
