use serde::Serialize;
use std::cmp::Ordering;

use crate::dataset::UserId;

pub type SimilarityScore = f64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityEntry {
    pub user: UserId,
    pub score: SimilarityScore,
}

impl SimilarityEntry {
    pub fn new(user: impl Into<UserId>, score: SimilarityScore) -> Self {
        Self {
            user: user.into(),
            score,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.score > 0.0
    }

    /// Highest score first, ties broken by user id ascending
    pub fn ranking_order(a: &Self, b: &Self) -> Ordering {
        b.score.total_cmp(&a.score).then_with(|| a.user.cmp(&b.user))
    }
}

/// Similar users sorted by descending score
pub type RankedSimilarityList = Vec<SimilarityEntry>;
