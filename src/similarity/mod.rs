pub mod pearson;
pub mod ranking;
pub mod types;

pub use pearson::pearson_correlation;
pub use ranking::{compute_similarity, rank_similar_users};
pub use types::{RankedSimilarityList, SimilarityEntry, SimilarityScore};
