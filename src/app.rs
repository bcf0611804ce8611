use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/smile/back", post(handlers::smile_back_form))
        .route("/smile/none", post(handlers::no_smile_back_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/smile", post(handlers::smile))
        .with_state(state)
}
