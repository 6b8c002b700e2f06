use log::debug;

use super::pearson::pearson_correlation;
use super::types::{RankedSimilarityList, SimilarityEntry, SimilarityScore};
use crate::dataset::{RatingDataset, RatingProfile};
use crate::errors::RecommendError;

/// Similarity between two users of the dataset
pub fn compute_similarity(
    user_a: &str,
    user_b: &str,
    dataset: &RatingDataset,
) -> Result<SimilarityScore, RecommendError> {
    let profile_a = find_profile(user_a, dataset)?;
    let profile_b = find_profile(user_b, dataset)?;
    Ok(pearson_correlation(profile_a, profile_b))
}

/// Scores every other user against `target_user`, best match first.
/// Non-positive scores are kept; filtering is up to the caller.
pub fn rank_similar_users(
    target_user: &str,
    dataset: &RatingDataset,
) -> Result<RankedSimilarityList, RecommendError> {
    let target_profile = find_profile(target_user, dataset)?;

    let mut scores: RankedSimilarityList = dataset
        .profiles()
        .filter(|(user, _)| user.as_str() != target_user)
        .map(|(user, profile)| {
            SimilarityEntry::new(user.clone(), pearson_correlation(target_profile, profile))
        })
        .collect();

    scores.sort_by(SimilarityEntry::ranking_order);

    debug!("Ranked {} users by similarity to {}", scores.len(), target_user);
    Ok(scores)
}

pub(crate) fn find_profile<'a>(
    user: &str,
    dataset: &'a RatingDataset,
) -> Result<&'a RatingProfile, RecommendError> {
    dataset
        .profile(user)
        .ok_or_else(|| RecommendError::UserNotFound(user.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample::reference_dataset;

    #[test]
    fn test_similarity_is_symmetric() {
        let dataset = reference_dataset().without_rating("Alice", "Inception");
        let users: Vec<String> = dataset.users().cloned().collect();

        for a in &users {
            for b in &users {
                let ab = compute_similarity(a, b, &dataset).unwrap();
                let ba = compute_similarity(b, a, &dataset).unwrap();
                assert_eq!(ab, ba, "similarity({}, {}) != similarity({}, {})", a, b, b, a);
            }
        }
    }

    #[test]
    fn test_rank_excludes_target_user() {
        let dataset = reference_dataset();

        for user in dataset.users() {
            let ranked = rank_similar_users(user, &dataset).unwrap();
            assert_eq!(ranked.len(), dataset.user_count() - 1);
            assert!(ranked.iter().all(|entry| &entry.user != user));
        }
    }

    #[test]
    fn test_rank_is_descending_and_keeps_negative_scores() {
        let dataset = reference_dataset().without_rating("Alice", "Inception");
        let ranked = rank_similar_users("Alice", &dataset).unwrap();

        let users: Vec<&str> = ranked.iter().map(|entry| entry.user.as_str()).collect();
        assert_eq!(users, vec!["Dave", "Carol", "Eve", "Bob"]);
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(ranked.last().unwrap().score < 0.0);
    }

    #[test]
    fn test_constant_fractional_rater_scores_zero() {
        let dataset = reference_dataset().with_profile(
            "Zed",
            RatingProfile::new()
                .with_rating("Titanic", 0.1)
                .with_rating("Avatar", 0.1)
                .with_rating("Avengers", 0.1),
        );

        let ranked = rank_similar_users("Alice", &dataset).unwrap();

        assert!(ranked.iter().all(|entry| entry.score.is_finite()));
        let zed = ranked.iter().find(|entry| entry.user == "Zed").unwrap();
        assert_eq!(zed.score, 0.0);
    }

    #[test]
    fn test_ties_break_by_user_id() {
        let dataset = RatingDataset::new()
            .with_profile("target", RatingProfile::new().with_rating("x", 1.0))
            .with_profile("zed", RatingProfile::new().with_rating("y", 1.0))
            .with_profile("amy", RatingProfile::new().with_rating("z", 1.0));

        let ranked = rank_similar_users("target", &dataset).unwrap();

        assert_eq!(ranked, vec![SimilarityEntry::new("amy", 0.0), SimilarityEntry::new("zed", 0.0)]);
    }

    #[test]
    fn test_unknown_user() {
        let dataset = reference_dataset();

        assert_eq!(
            rank_similar_users("Zach", &dataset),
            Err(RecommendError::UserNotFound("Zach".to_string()))
        );
        assert_eq!(
            compute_similarity("Alice", "Zach", &dataset),
            Err(RecommendError::UserNotFound("Zach".to_string()))
        );
    }
}
