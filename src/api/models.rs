use serde::{Deserialize, Serialize};

use crate::recommendation::RecommendationEntry;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user: String,
}

/// Wire shape expected by the bundled front-end
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub movie: String,
    pub score: f64,
}

impl From<RecommendationEntry> for RecommendationItem {
    fn from(entry: RecommendationEntry) -> Self {
        Self {
            movie: entry.item,
            score: entry.score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
