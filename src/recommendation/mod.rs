pub mod aggregation;
pub mod types;

pub use aggregation::{aggregate_predictions, recommend};
pub use types::{RankedRecommendationList, RecommendationEntry};
