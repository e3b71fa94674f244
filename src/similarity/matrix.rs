use rayon::prelude::*;
use tracing::debug;

use crate::error::SimilarityError;
use crate::similarity::scoring::{cosine, Ranking};
use crate::similarity::token::TokenFrequency;
use crate::similarity::vector::build_vectors;
use crate::similarity::Document;

/// Sentinel stored in consumed cells. Genuine cosine scores are never
/// negative, so a live score can never collide with it.
const CONSUMED: f64 = -1.0;

/// Strictly-upper-triangular table of pairwise similarity scores over a
/// document set. Built once, then consumed destructively by `top_k`.
///
/// Cells are laid out in the selection scan order: row index ascending,
/// column index descending inside each row, so extraction ties break on
/// the first-encountered pair of that enumeration.
pub struct PairwiseMatrix {
    doc_num: usize,
    /// (i, j) per cell, in scan order.
    pairs: Vec<(usize, usize)>,
    /// Score per cell, same order; `CONSUMED` once reported.
    scores: Vec<f64>,
}

impl PairwiseMatrix {
    /// Tokenize every document exactly once, then score all unordered
    /// pairs (i < j). Pair scoring runs in parallel; each cell is an
    /// independent pure computation written at a distinct index, and the
    /// collect below is a full barrier before any selection can start.
    pub fn build(documents: &[Document]) -> Result<Self, SimilarityError> {
        let doc_num = documents.len();
        let frequencies: Vec<TokenFrequency> = documents
            .par_iter()
            .map(|doc| TokenFrequency::from_text(&doc.text))
            .collect();

        let pairs = Self::pair_order(doc_num);
        let scores = pairs
            .par_iter()
            .map(|&(i, j)| {
                let (_, vec_a, vec_b) = build_vectors(&frequencies[i], &frequencies[j]);
                cosine(&vec_a, &vec_b)
            })
            .collect::<Result<Vec<f64>, SimilarityError>>()?;

        debug!(doc_num, pair_num = scores.len(), "pairwise matrix filled");
        Ok(PairwiseMatrix {
            doc_num,
            pairs,
            scores,
        })
    }

    /// The upper-triangle cells in scan order: i ascending, j descending.
    fn pair_order(doc_num: usize) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(doc_num * doc_num.saturating_sub(1) / 2);
        for i in 0..doc_num.saturating_sub(1) {
            for j in ((i + 1)..doc_num).rev() {
                pairs.push((i, j));
            }
        }
        pairs
    }

    /// Flat cell index of the pair (i, j), i < j < doc_num.
    #[inline]
    fn cell_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.doc_num);
        let row_start = i * (self.doc_num - 1) - i * (i - 1) / 2;
        row_start + (self.doc_num - 1 - j)
    }

    /// Score of the unordered pair (i, j) with i < j, or `None` once the
    /// cell has been consumed by `top_k`.
    pub fn score(&self, i: usize, j: usize) -> Option<f64> {
        let value = self.scores[self.cell_index(i, j)];
        (value >= 0.0).then_some(value)
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    /// Number of cells, C(doc_num, 2).
    #[inline]
    pub fn pair_num(&self) -> usize {
        self.scores.len()
    }

    /// Extract the `k` highest-scoring pairs, best first, consuming each
    /// reported cell so no pair is ever emitted twice.
    ///
    /// Each round scans all remaining cells and takes the strictly largest
    /// score; equal scores go to the first-encountered cell of the scan
    /// order. Stops early once every cell is consumed, so `k` larger than
    /// the pair count is tolerated.
    pub fn top_k(&mut self, k: usize) -> Ranking {
        let mut list = Vec::with_capacity(k.min(self.scores.len()));
        for _ in 0..k {
            let mut smax = CONSUMED;
            let mut best = None;
            for (index, &score) in self.scores.iter().enumerate() {
                if score > smax {
                    smax = score;
                    best = Some(index);
                }
            }
            let Some(index) = best else {
                break;
            };
            self.scores[index] = CONSUMED;
            let (i, j) = self.pairs[index];
            list.push((smax, i, j));
        }
        Ranking::new(list)
    }
}
