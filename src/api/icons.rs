//! Emoji icons for movie titles.

/// Fallback when no keyword matches.
pub const DEFAULT_ICON: &str = "🎬";

/// First keyword hit wins, so order matters for titles containing more
/// than one.
const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("prison", "🔒"),
    ("escape", "🏃"),
    ("boss", "🕴️"),
    ("vigilante", "🦇"),
    ("dream", "💭"),
    ("heist", "💰"),
    ("ring", "💍"),
    ("wizard", "🧙"),
    ("space", "🚀"),
    ("odyssey", "🪐"),
    ("killer", "🔪"),
    ("war", "🎖️"),
    ("fish", "🐠"),
    ("world", "🌍"),
    ("time", "⏰"),
];

/// Pick a decorative icon for a title by keyword, case-insensitively.
#[must_use]
pub fn movie_icon(title: &str) -> &'static str {
    let title = title.to_lowercase();
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}
