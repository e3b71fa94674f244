use std::fmt::Debug;

use num::Num;

use crate::error::SimilarityError;

/// Cosine similarity of two equal-length vectors.
/// cosθ = A・B / (|A||B|)
///
/// All components are non-negative frequency counts, so the result is
/// mathematically in [0,1]. Degenerate norms are handled explicitly:
/// two zero vectors count as identical (1.0), a single zero vector as
/// maximally dissimilar (0.0). A length mismatch is a caller bug and
/// fails with `DimensionMismatch`.
///
/// Accumulation is a single left-to-right pass, so identical inputs
/// always produce identical results.
pub fn cosine<N>(vec_a: &[N], vec_b: &[N]) -> Result<f64, SimilarityError>
where
    N: Num + Copy + Into<f64>,
{
    if vec_a.len() != vec_b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: vec_a.len(),
            right: vec_b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&a, &b) in vec_a.iter().zip(vec_b.iter()) {
        let a: f64 = a.into();
        let b: f64 = b.into();
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();

    if norm_a == 0.0 && norm_b == 0.0 {
        // two empty documents are defined identical
        Ok(1.0)
    } else if norm_a == 0.0 || norm_b == 0.0 {
        // one empty, one not: maximally dissimilar
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

/// Ranked result list produced by top-K extraction.
/// Entries are `(score, i, j)` with `i < j`, ordered by descending score.
pub struct Ranking {
    pub list: Vec<(f64, usize, usize)>,
}

impl Ranking {
    pub fn new(list: Vec<(f64, usize, usize)>) -> Self {
        Ranking { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each pair on a new line
            writeln!(f, "Ranking [")?;
            for (score, i, j) in &self.list {
                writeln!(f, "    ({}, {}): {:.6}", i, j, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}
