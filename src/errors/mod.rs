use thiserror::Error;

use crate::dataset::UserId;

/// Errors surfaced by the recommendation engine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),
}

/// Add context to dataset loading errors
pub fn load_context(path: &str) -> String {
    format!("Failed to load rating dataset from: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
