use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{info, warn};
use std::sync::Arc;

use crate::api::models::{ErrorResponse, RecommendRequest, RecommendationItem};
use crate::config::settings::AppConfig;
use crate::dataset::RatingDataset;
use crate::errors::RecommendError;
use crate::recommendation;

pub struct AppState {
    pub dataset: RatingDataset,
    pub config: AppConfig,
}

pub async fn post_recommend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> impl IntoResponse {
    info!("Visited /recommend");
    info!("Requested user: {}", request.user);

    match recommendation::recommend(&request.user, &state.dataset) {
        Ok(recommendations) => {
            info!("Returning {} recommendations for {}", recommendations.len(), request.user);
            let items: Vec<RecommendationItem> =
                recommendations.into_iter().map(RecommendationItem::from).collect();
            Json(items).into_response()
        }
        Err(RecommendError::UserNotFound(user)) => {
            warn!("Recommendation requested for unknown user: {}", user);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("User not found"))).into_response()
        }
    }
}

pub async fn get_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let users: Vec<&String> = state.dataset.users().collect();
    Json(users).into_response()
}
