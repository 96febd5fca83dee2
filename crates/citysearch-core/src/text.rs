// crates/citysearch-core/src/text.rs

//! Key normalisation and tokenisation shared by the index and the queries.

/// Token separator for names and queries. Only a single ASCII space splits;
/// consecutive spaces yield empty tokens.
pub const TOKEN_SEPARATOR: char = ' ';

/// Unicode-aware lowercase key.
///
/// ```rust
/// use citysearch_core::text::lowercase_key;
///
/// assert_eq!(lowercase_key("San José"), "san josé");
/// ```
pub fn lowercase_key(s: &str) -> String {
    s.to_lowercase()
}

/// Accent-insensitive key for the index and for queries.
///
/// Names are transliterated to ASCII with `deunicode`, then lowercased, so
/// "Zürich" is indexed as "zurich" and the query "zur" finds it. Keys and
/// queries must go through the same function or prefix matching breaks.
///
/// ```rust
/// use citysearch_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Splits `s` into its space-separated tokens, keeping empty ones.
pub fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(TOKEN_SEPARATOR)
}
