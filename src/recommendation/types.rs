use serde::Serialize;
use std::cmp::Ordering;

use crate::dataset::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    pub item: ItemId,
    pub score: f64,
}

impl RecommendationEntry {
    pub fn new(item: impl Into<ItemId>, score: f64) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }

    /// Highest predicted score first, ties broken by item id ascending
    pub fn ranking_order(a: &Self, b: &Self) -> Ordering {
        b.score.total_cmp(&a.score).then_with(|| a.item.cmp(&b.item))
    }
}

pub type RankedRecommendationList = Vec<RecommendationEntry>;
