use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type ItemId = String;
pub type Rating = f64;

/// Ratings a single user has given, keyed by item.
/// An item missing from the map is unrated, which is not the same as a zero rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingProfile {
    ratings: BTreeMap<ItemId, Rating>,
}

impl RatingProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rating(mut self, item: impl Into<ItemId>, rating: Rating) -> Self {
        self.ratings.insert(item.into(), rating);
        self
    }

    pub fn without_rating(mut self, item: &str) -> Self {
        self.ratings.remove(item);
        self
    }

    pub fn rating(&self, item: &str) -> Option<Rating> {
        self.ratings.get(item).copied()
    }

    pub fn has_rated(&self, item: &str) -> bool {
        self.ratings.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Rating)> {
        self.ratings.iter().map(|(item, &rating)| (item, rating))
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl<I: Into<ItemId>> FromIterator<(I, Rating)> for RatingProfile {
    fn from_iter<T: IntoIterator<Item = (I, Rating)>>(iter: T) -> Self {
        Self {
            ratings: iter.into_iter().map(|(item, rating)| (item.into(), rating)).collect(),
        }
    }
}

/// Every user's rating profile. Built once and then only read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingDataset {
    profiles: BTreeMap<UserId, RatingProfile>,
}

impl RatingDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, user: impl Into<UserId>, profile: RatingProfile) -> Self {
        self.profiles.insert(user.into(), profile);
        self
    }

    pub fn without_user(mut self, user: &str) -> Self {
        self.profiles.remove(user);
        self
    }

    /// Returns a copy with one rating removed; unknown users are left untouched.
    pub fn without_rating(mut self, user: &str, item: &str) -> Self {
        if let Some(profile) = self.profiles.remove(user) {
            self.profiles.insert(user.to_string(), profile.without_rating(item));
        }
        self
    }

    pub fn profile(&self, user: &str) -> Option<&RatingProfile> {
        self.profiles.get(user)
    }

    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.profiles.keys()
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&UserId, &RatingProfile)> {
        self.profiles.iter()
    }

    pub fn user_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn rating_count(&self) -> usize {
        self.profiles.values().map(RatingProfile::len).sum()
    }
}

impl<U: Into<UserId>> FromIterator<(U, RatingProfile)> for RatingDataset {
    fn from_iter<T: IntoIterator<Item = (U, RatingProfile)>>(iter: T) -> Self {
        Self {
            profiles: iter.into_iter().map(|(user, profile)| (user.into(), profile)).collect(),
        }
    }
}
