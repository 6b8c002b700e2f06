use anyhow::{bail, Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use super::types::RatingDataset;
use crate::config::sample::reference_dataset;
use crate::config::settings::DatasetSettings;
use crate::errors::{load_context, parse_context};

/// Load the dataset named by the settings, falling back to the built-in reference data
pub fn load_dataset(settings: &DatasetSettings) -> Result<RatingDataset> {
    match &settings.path {
        Some(path) => load_from_file(path),
        None => {
            info!("No dataset path configured, using built-in reference ratings");
            Ok(reference_dataset())
        }
    }
}

/// Load a dataset from a JSON file of the form `{ "user": { "item": rating } }`
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RatingDataset> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = fs::read_to_string(path).with_context(|| load_context(&display))?;
    let dataset = parse_dataset(&json).with_context(|| load_context(&display))?;

    info!(
        "Loaded {} users with {} ratings from {}",
        dataset.user_count(),
        dataset.rating_count(),
        display
    );
    Ok(dataset)
}

pub fn parse_dataset(json: &str) -> Result<RatingDataset> {
    let dataset: RatingDataset =
        serde_json::from_str(json).with_context(|| parse_context("rating dataset"))?;
    validate_ratings(&dataset)?;
    Ok(dataset)
}

fn validate_ratings(dataset: &RatingDataset) -> Result<()> {
    for (user, profile) in dataset.profiles() {
        for (item, rating) in profile.iter() {
            if !rating.is_finite() {
                bail!("Rating of {} for {} is not a finite number", user, item);
            }
        }
    }
    Ok(())
}
