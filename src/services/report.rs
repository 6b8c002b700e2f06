use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::recommendation::RecommendationEntry;
use crate::similarity::SimilarityEntry;

/// Keeps the first `limit` entries; `None` keeps everything
pub fn truncate<T>(mut entries: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

pub fn render_json<T: Serialize>(entries: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn render_recommendations(user: &str, entries: &[RecommendationEntry]) -> String {
    if entries.is_empty() {
        return format!("No recommendations for {}", user.bold());
    }

    let mut out = format!("Recommendations for {}\n", user.bold());
    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<30} {}\n",
            rank + 1,
            entry.item,
            format!("{:.4}", entry.score).green()
        ));
    }
    out
}

pub fn render_similarities(user: &str, entries: &[SimilarityEntry]) -> String {
    if entries.is_empty() {
        return format!("No other users to compare with {}", user.bold());
    }

    let mut out = format!("Users similar to {}\n", user.bold());
    for (rank, entry) in entries.iter().enumerate() {
        let score = format!("{:+.4}", entry.score);
        let score = if entry.is_positive() { score.green() } else { score.red() };
        out.push_str(&format!("{:>3}. {:<30} {}\n", rank + 1, entry.user, score));
    }
    out
}
