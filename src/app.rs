use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/goals", post(handlers::form_add))
        .route("/goals/cancel", post(handlers::form_cancel))
        .route("/goals/:id/toggle", post(handlers::form_toggle))
        .route("/goals/:id/delete", post(handlers::form_remove))
        .route("/goals/:id/edit", post(handlers::form_start_edit))
        .route("/goals/:id/commit", post(handlers::form_commit))
        .route("/api/goals", get(handlers::get_board).post(handlers::add_goal))
        .route(
            "/api/goals/:id",
            patch(handlers::edit_goal).delete(handlers::remove_goal),
        )
        .route("/api/goals/:id/toggle", post(handlers::toggle_goal))
        .route("/api/goals/:id/edit", post(handlers::start_edit))
        .route("/api/goals/:id/commit", post(handlers::commit_edit))
        .with_state(state)
}
