use std::collections::BTreeMap;
use log::{debug, info};

use super::types::{RankedRecommendationList, RecommendationEntry};
use crate::dataset::{Rating, RatingDataset, RatingProfile};
use crate::errors::RecommendError;
use crate::similarity::ranking::find_profile;
use crate::similarity::{rank_similar_users, SimilarityEntry};

/// Similarity-weighted rating totals for one candidate item
#[derive(Debug, Default, Clone, Copy)]
struct WeightedRating {
    weighted_sum: f64,
    similarity_sum: f64,
}

impl WeightedRating {
    fn add(&mut self, rating: Rating, similarity: f64) {
        self.weighted_sum += rating * similarity;
        self.similarity_sum += similarity;
    }

    fn predicted_score(&self) -> f64 {
        self.weighted_sum / self.similarity_sum
    }
}

/// Recommends the items `target_user` has not rated, best predicted score first.
///
/// Unknown users are rejected before any similarity is computed. The result is
/// empty when nobody correlates positively with the target user, or when the
/// positively correlated users have rated nothing new.
pub fn recommend(
    target_user: &str,
    dataset: &RatingDataset,
) -> Result<RankedRecommendationList, RecommendError> {
    let target_profile = find_profile(target_user, dataset)?;

    // 1. Similarity pass completes before any aggregation starts
    let similar_users = rank_similar_users(target_user, dataset)?;

    // 2. Aggregate neighbours' ratings into predictions
    let recommendations = aggregate_predictions(target_profile, &similar_users, dataset);

    info!(
        "Produced {} recommendations for {} from {} candidate neighbours",
        recommendations.len(),
        target_user,
        similar_users.len()
    );
    Ok(recommendations)
}

/// Turns a ranked similarity list into ranked predictions for the target's unrated items.
/// Entries with a non-positive score, or for users absent from the dataset, contribute nothing.
pub fn aggregate_predictions(
    target_profile: &RatingProfile,
    similar_users: &[SimilarityEntry],
    dataset: &RatingDataset,
) -> RankedRecommendationList {
    let totals = accumulate_weighted_ratings(target_profile, similar_users, dataset);
    rank_predictions(totals)
}

fn accumulate_weighted_ratings<'a>(
    target_profile: &RatingProfile,
    similar_users: &[SimilarityEntry],
    dataset: &'a RatingDataset,
) -> BTreeMap<&'a str, WeightedRating> {
    let mut totals: BTreeMap<&str, WeightedRating> = BTreeMap::new();

    for neighbour in similar_users.iter().filter(|entry| entry.is_positive()) {
        let Some(profile) = dataset.profile(&neighbour.user) else {
            debug!("Skipping {}: not in dataset", neighbour.user);
            continue;
        };

        for (item, rating) in profile.iter() {
            if target_profile.has_rated(item) {
                continue;
            }
            totals
                .entry(item.as_str())
                .or_default()
                .add(rating, neighbour.score);
        }
    }

    totals
}

fn rank_predictions(totals: BTreeMap<&str, WeightedRating>) -> RankedRecommendationList {
    let mut rankings: RankedRecommendationList = totals
        .into_iter()
        .map(|(item, total)| RecommendationEntry::new(item, total.predicted_score()))
        .collect();

    rankings.sort_by(RecommendationEntry::ranking_order);
    rankings
}
