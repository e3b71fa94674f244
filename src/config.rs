use std::path::PathBuf;

/// Default number of documents to compare when `N` is not given.
pub const DEFAULT_DOC_LIMIT: usize = 5;
/// Default number of ranked pairs to report when `K` is not given.
pub const DEFAULT_TOP_K: usize = 3;

/// Run configuration assembled once from the raw argument list and passed
/// by reference into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of documents to include in the comparison (`N`).
    pub doc_limit: usize,
    /// Number of ranked pairs to report (`K`).
    pub top_k: usize,
    /// Source directory scanned for `.txt` files (`D`).
    pub dir: PathBuf,
    /// Whether the user supplied `N` explicitly.
    pub doc_limit_given: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            doc_limit: DEFAULT_DOC_LIMIT,
            top_k: DEFAULT_TOP_K,
            dir: PathBuf::from("."),
            doc_limit_given: false,
        }
    }
}

impl RunConfig {
    /// Scan the raw arguments for the literal markers `N`, `K` and `D`,
    /// each of which takes its value from the following token.
    ///
    /// Every position is examined, including value positions, so a value
    /// token that happens to equal a marker is also honored as one.
    /// A marker with a missing or unparsable value leaves the default in
    /// place. `N` must be a positive integer; `K` a non-negative integer.
    pub fn from_args<S>(args: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut config = RunConfig::default();
        for index in 0..args.len() {
            match args[index].as_ref() {
                "N" => {
                    if let Some(n) = args.get(index + 1).and_then(|v| parse_count(v.as_ref())) {
                        if n > 0 {
                            config.doc_limit = n;
                            config.doc_limit_given = true;
                        }
                    }
                }
                "K" => {
                    if let Some(k) = args.get(index + 1).and_then(|v| parse_count(v.as_ref())) {
                        config.top_k = k;
                    }
                }
                "D" => {
                    if let Some(value) = args.get(index + 1) {
                        config.dir = PathBuf::from(value.as_ref());
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Apply the clamping rules against the number of discovered files:
    /// `N` falls back to the file count when not user-given or when it
    /// exceeds it, and `K` is capped at C(N,2), the number of unordered
    /// pairs.
    pub fn clamp_to(&mut self, file_num: usize) {
        if !self.doc_limit_given || self.doc_limit > file_num {
            self.doc_limit = file_num;
        }
        if self.top_k > self.pair_limit() {
            self.top_k = self.pair_limit();
        }
    }

    /// C(N,2) for the current document limit.
    #[inline]
    pub fn pair_limit(&self) -> usize {
        self.doc_limit * self.doc_limit.saturating_sub(1) / 2
    }
}

/// Digits-only integer parse, mirroring the strictness of the original
/// marker scan: no sign, no whitespace.
fn parse_count(value: &str) -> Option<usize> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(args: &[&str]) -> RunConfig {
        RunConfig::from_args(args)
    }

    #[test]
    fn defaults_when_no_args() {
        let config = config_of(&[]);
        assert_eq!(config.doc_limit, DEFAULT_DOC_LIMIT);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
        assert_eq!(config.dir, PathBuf::from("."));
        assert!(!config.doc_limit_given);
    }

    #[test]
    fn markers_take_the_following_token() {
        let config = config_of(&["N", "7", "K", "4", "D", "corpus"]);
        assert_eq!(config.doc_limit, 7);
        assert!(config.doc_limit_given);
        assert_eq!(config.top_k, 4);
        assert_eq!(config.dir, PathBuf::from("corpus"));
    }

    #[test]
    fn marker_order_does_not_matter() {
        let config = config_of(&["D", "docs", "N", "2"]);
        assert_eq!(config.doc_limit, 2);
        assert_eq!(config.dir, PathBuf::from("docs"));
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = config_of(&["N", "many", "K", "-1", "K", "2.5"]);
        assert_eq!(config.doc_limit, DEFAULT_DOC_LIMIT);
        assert!(!config.doc_limit_given);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn zero_is_not_a_valid_doc_limit() {
        let config = config_of(&["N", "0"]);
        assert_eq!(config.doc_limit, DEFAULT_DOC_LIMIT);
        assert!(!config.doc_limit_given);
    }

    #[test]
    fn zero_is_a_valid_top_k() {
        let config = config_of(&["K", "0"]);
        assert_eq!(config.top_k, 0);
    }

    #[test]
    fn trailing_marker_without_value_is_ignored() {
        let config = config_of(&["K", "9", "N"]);
        assert_eq!(config.top_k, 9);
        assert_eq!(config.doc_limit, DEFAULT_DOC_LIMIT);
    }

    #[test]
    fn clamp_resets_doc_limit_when_not_given() {
        let mut config = config_of(&[]);
        config.clamp_to(3);
        assert_eq!(config.doc_limit, 3);
        assert_eq!(config.top_k, 3); // C(3,2) = 3
    }

    #[test]
    fn clamp_caps_doc_limit_at_file_count() {
        let mut config = config_of(&["N", "5", "K", "10"]);
        config.clamp_to(3);
        assert_eq!(config.doc_limit, 3);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn clamp_keeps_user_doc_limit_within_bounds() {
        let mut config = config_of(&["N", "4", "K", "100"]);
        config.clamp_to(10);
        assert_eq!(config.doc_limit, 4);
        assert_eq!(config.top_k, 6); // C(4,2) = 6
    }

    #[test]
    fn pair_limit_handles_tiny_counts() {
        let mut config = config_of(&["N", "1"]);
        config.clamp_to(1);
        assert_eq!(config.pair_limit(), 0);
        assert_eq!(config.top_k, 0);
    }
}
