use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TokenFrequency structure
/// Manages the occurrence counts of word tokens within a single document.
/// Keys are lowercase whitespace-delimited tokens; a key is only present
/// while its count is non-zero, and the running total always equals the
/// token count of the source text.
///
/// # Examples
/// ```
/// use doc_similarity::TokenFrequency;
/// let freq = TokenFrequency::from_text("Cat dog cat");
/// assert_eq!(freq.token_count("cat"), 2);
/// assert_eq!(freq.token_total_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Token addition
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Build a frequency multiset from raw document text.
    ///
    /// The whole input is lowercased, then split on runs of whitespace, so
    /// leading/trailing whitespace never produces empty tokens. No stemming
    /// and no punctuation stripping: punctuation adjacent to letters stays
    /// part of the token.
    pub fn from_text(text: &str) -> Self {
        let mut freq = TokenFrequency::new();
        let lowered = text.to_lowercase();
        for token in lowered.split_whitespace() {
            freq.add_token(token);
        }
        freq
    }

    /// Count one occurrence of `token`.
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Count one occurrence of each token in the slice.
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Reset all counts.
    #[inline]
    pub fn clear(&mut self) {
        self.token_count.clear();
        self.total_token_count = 0;
    }
}

/// Lookups and statistics
impl TokenFrequency {
    /// Occurrence count of `token`; 0 when absent.
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(token).unwrap_or(&0)
    }

    /// Sum of all counts, i.e. the token count of the source text.
    #[inline]
    pub fn token_total_count(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// The set of distinct tokens, as references in insertion order.
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|token| token.as_str()).collect()
    }
}
