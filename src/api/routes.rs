use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{get_users, post_recommend, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/recommend", post(post_recommend))
        .route("/users", get(get_users))
        .fallback_service(static_files)
        .with_state(state)
}
