use super::types::SimilarityScore;
use crate::dataset::{Rating, RatingProfile};

/// Running sums over the items two users have both rated
#[derive(Debug, Default)]
struct CoRatedSums {
    n: usize,
    sum1: f64,
    sum2: f64,
    sum_sq1: f64,
    sum_sq2: f64,
    sum_products: f64,
    first: Option<(Rating, Rating)>,
    varies1: bool,
    varies2: bool,
}

impl CoRatedSums {
    fn add(&mut self, r1: Rating, r2: Rating) {
        match self.first {
            Some((first1, first2)) => {
                self.varies1 |= r1 != first1;
                self.varies2 |= r2 != first2;
            }
            None => self.first = Some((r1, r2)),
        }
        self.n += 1;
        self.sum1 += r1;
        self.sum2 += r2;
        self.sum_sq1 += r1 * r1;
        self.sum_sq2 += r2 * r2;
        self.sum_products += r1 * r2;
    }
}

/// Pearson correlation of two profiles over their co-rated items.
///
/// Returns 0.0 when the users share no items, when either user gave every
/// co-rated item the same rating, or when the sums are not finite.
pub fn pearson_correlation(a: &RatingProfile, b: &RatingProfile) -> SimilarityScore {
    let sums = accumulate_co_rated(a, b);
    if is_degenerate(&sums) {
        return 0.0;
    }

    let numerator = calculate_numerator(&sums);
    let denominator = calculate_denominator(&sums);

    // Rounding can push a near-zero variance negative, and huge ratings overflow the squares
    if denominator.is_nan() || denominator <= 0.0 || denominator.is_infinite() {
        return 0.0;
    }

    let score = numerator / denominator;
    if score.is_finite() { score } else { 0.0 }
}

fn accumulate_co_rated(a: &RatingProfile, b: &RatingProfile) -> CoRatedSums {
    // Profiles iterate in item order, so the sums come out identical for (a, b) and (b, a)
    let mut sums = CoRatedSums::default();
    for (item, r1) in a.iter() {
        if let Some(r2) = b.rating(item) {
            sums.add(r1, r2);
        }
    }
    sums
}

/// Constant ratings on either side leave nothing to correlate
fn is_degenerate(sums: &CoRatedSums) -> bool {
    sums.n == 0 || !sums.varies1 || !sums.varies2
}

fn calculate_numerator(sums: &CoRatedSums) -> f64 {
    let n = sums.n as f64;
    sums.sum_products - (sums.sum1 * sums.sum2) / n
}

fn calculate_denominator(sums: &CoRatedSums) -> f64 {
    let n = sums.n as f64;
    let variance1 = sums.sum_sq1 - sums.sum1.powi(2) / n;
    let variance2 = sums.sum_sq2 - sums.sum2.powi(2) / n;
    (variance1 * variance2).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(ratings: &[(&str, f64)]) -> RatingProfile {
        ratings.iter().copied().collect()
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let a = profile(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        let b = profile(&[("x", 2.0), ("y", 4.0), ("z", 6.0)]);

        assert!((pearson_correlation(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let a = profile(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        let b = profile(&[("x", 3.0), ("y", 2.0), ("z", 1.0)]);

        assert!((pearson_correlation(&a, &b) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_co_rated_items_count() {
        let a = profile(&[("x", 1.0), ("y", 2.0), ("only_a", 5.0)]);
        let b = profile(&[("x", 1.0), ("y", 2.0), ("only_b", 1.0)]);

        assert!((pearson_correlation(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_is_zero() {
        let a = profile(&[("x", 4.0), ("y", 2.0)]);
        let b = profile(&[("z", 4.0), ("w", 1.0)]);

        assert_eq!(pearson_correlation(&a, &b), 0.0);
        assert_eq!(pearson_correlation(&a, &RatingProfile::new()), 0.0);
    }

    #[test]
    fn test_zero_variance_is_zero() {
        let a = profile(&[("x", 3.0), ("y", 3.0), ("z", 3.0)]);
        let b = profile(&[("x", 1.0), ("y", 5.0), ("z", 2.0)]);
        let c = profile(&[("x", 4.0), ("y", 4.0), ("z", 4.0)]);

        assert_eq!(pearson_correlation(&a, &b), 0.0);
        assert_eq!(pearson_correlation(&a, &c), 0.0);
    }

    #[test]
    fn test_fractional_constant_ratings_are_zero() {
        let varying = profile(&[
            ("a", 1.0), ("b", 4.0), ("c", 2.0), ("d", 5.0), ("e", 3.0), ("f", 2.5),
        ]);
        let tenths_3 = profile(&[("a", 0.1), ("b", 0.1), ("c", 0.1)]);
        let tenths_6 = profile(&[
            ("a", 0.1), ("b", 0.1), ("c", 0.1), ("d", 0.1), ("e", 0.1), ("f", 0.1),
        ]);
        let sevenths_5 = profile(&[("a", 0.7), ("b", 0.7), ("c", 0.7), ("d", 0.7), ("e", 0.7)]);

        for constant in [&tenths_3, &tenths_6, &sevenths_5] {
            assert_eq!(pearson_correlation(constant, &varying), 0.0);
            assert_eq!(pearson_correlation(&varying, constant), 0.0);
        }
        assert_eq!(pearson_correlation(&tenths_6, &sevenths_5), 0.0);
    }

    #[test]
    fn test_overflowing_ratings_are_zero() {
        let huge = profile(&[("x", 1e200), ("y", 2e200), ("z", 3e200)]);
        let small = profile(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);

        assert_eq!(pearson_correlation(&huge, &small), 0.0);
        assert_eq!(pearson_correlation(&small, &huge), 0.0);
    }

    #[test]
    fn test_single_common_item_is_zero() {
        let a = profile(&[("x", 5.0)]);
        let b = profile(&[("x", 1.0)]);

        assert_eq!(pearson_correlation(&a, &b), 0.0);
    }

    #[test]
    fn test_matches_hand_computed_value() {
        // Alice vs Carol on Titanic, Avatar, Avengers
        let alice = profile(&[("Titanic", 4.0), ("Avatar", 5.0), ("Avengers", 2.0)]);
        let carol = profile(&[("Titanic", 2.0), ("Avatar", 5.0), ("Avengers", 1.0)]);

        assert!((pearson_correlation(&alice, &carol) - 0.891042111213631).abs() < 1e-9);
    }
}
