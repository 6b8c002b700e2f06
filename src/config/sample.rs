use crate::dataset::{RatingDataset, RatingProfile};

/// Ratings served when no dataset file is configured
const REFERENCE_RATINGS: &[(&str, [(&str, f64); 4])] = &[
    ("Alice", [("Titanic", 4.0), ("Avatar", 5.0), ("Avengers", 2.0), ("Inception", 4.0)]),
    ("Bob", [("Titanic", 5.0), ("Avatar", 1.0), ("Avengers", 4.0), ("Inception", 3.0)]),
    ("Carol", [("Titanic", 2.0), ("Avatar", 5.0), ("Avengers", 1.0), ("Inception", 4.0)]),
    ("Dave", [("Titanic", 3.0), ("Avatar", 4.0), ("Avengers", 2.0), ("Inception", 5.0)]),
    ("Eve", [("Titanic", 5.0), ("Avatar", 4.0), ("Avengers", 3.0), ("Inception", 4.0)]),
];

pub fn reference_dataset() -> RatingDataset {
    REFERENCE_RATINGS
        .iter()
        .map(|(user, ratings)| (*user, ratings.iter().copied().collect::<RatingProfile>()))
        .collect()
}
