use std::collections::BTreeSet;

use crate::similarity::token::TokenFrequency;

/// Sorted union of the token keys of one compared pair, fixing the
/// dimension ordering of both frequency vectors. Local to a single
/// comparison, never shared across pairs.
pub type Vocabulary = Vec<String>;

/// Build the aligned frequency-vector pair for two token multisets.
///
/// The vocabulary is the strictly increasing (lexicographic) union of both
/// key sets; each vector holds the owning multiset's count at the matching
/// position, 0 where the token is absent. Two empty multisets produce an
/// empty vocabulary and two zero-length vectors, which the scorer's
/// zero-norm branch handles.
pub fn build_vectors(
    freq_a: &TokenFrequency,
    freq_b: &TokenFrequency,
) -> (Vocabulary, Vec<u32>, Vec<u32>) {
    let union: BTreeSet<&str> = freq_a
        .token_set_ref_str()
        .into_iter()
        .chain(freq_b.token_set_ref_str())
        .collect();

    let mut vec_a = Vec::with_capacity(union.len());
    let mut vec_b = Vec::with_capacity(union.len());
    for &token in &union {
        vec_a.push(freq_a.token_count(token));
        vec_b.push(freq_b.token_count(token));
    }
    let vocabulary = union.into_iter().map(str::to_string).collect();
    (vocabulary, vec_a, vec_b)
}
