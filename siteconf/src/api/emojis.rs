/// Emoji constants used by the site configuration
/// Kept in one place so the identity and the icon table share the same glyphs

// Identity emojis
pub const PANDA: &str = "🐼";

// Category emojis
pub const BOOKS: &str = "📚";
pub const CLOVER: &str = "🍀";
pub const HOUSE: &str = "🏠";
