// crates/citysearch-core/src/search/matcher.rs
use crate::text::tokens;
use std::cmp::Ordering;

/// A normalised query split into tokens, compared against index keys.
///
/// Matching rule: a key matches when it has at least as many tokens as the
/// query and every query token is a prefix of the key token at the same
/// position. Extra trailing key tokens are ignored.
#[derive(Debug, Clone)]
pub struct TokenQuery<'q> {
    text: &'q str,
    tokens: Vec<&'q str>,
}

impl<'q> TokenQuery<'q> {
    /// `text` must already be normalised the same way as the index keys.
    pub fn new(text: &'q str) -> Self {
        Self {
            text,
            tokens: tokens(text).collect(),
        }
    }

    pub fn text(&self) -> &'q str {
        self.text
    }

    pub fn tokens(&self) -> &[&'q str] {
        &self.tokens
    }

    /// First query token. Every matching key starts with it.
    pub fn leading_token(&self) -> &'q str {
        self.tokens.first().copied().unwrap_or_default()
    }

    /// Position of `key` relative to the query's matches: `Equal` means
    /// `key` matches.
    ///
    /// With enough key tokens, the first token pair that fails the prefix
    /// test decides by comparing the key token against the query token.
    /// With fewer key tokens than query tokens the whole key is compared
    /// against the whole query text, which keeps the result consistent with
    /// the alphabetical order of the index.
    pub fn compare(&self, key: &str) -> Ordering {
        if tokens(key).count() < self.tokens.len() {
            return key.cmp(self.text);
        }
        for (&query_token, key_token) in self.tokens.iter().zip(tokens(key)) {
            if !key_token.starts_with(query_token) {
                return key_token.cmp(query_token);
            }
        }
        Ordering::Equal
    }

    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        self.compare(key) == Ordering::Equal
    }
}

/// `Equal` when `key` starts with `prefix`, otherwise the plain ordering of
/// `key` against `prefix`.
///
/// Keys starting with a given prefix are contiguous in any sorted list, so
/// this comparator is monotone over a sorted index whatever the keys hold.
#[inline]
pub fn prefix_compare(key: &str, prefix: &str) -> Ordering {
    if key.starts_with(prefix) {
        Ordering::Equal
    } else {
        key.cmp(prefix)
    }
}
