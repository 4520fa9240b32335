use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::controllers::poll_controllers::{
    cast_vote, close_poll, create_poll, delete_poll, polls,
};
use crate::state::AppState;

pub fn poll_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(polls::get_all_polls).post(create_poll::create_poll),
        )
        .route("/vote/:id", patch(cast_vote::cast_vote))
        .route("/:id/close", patch(close_poll::close_poll))
        .route("/:id", delete(delete_poll::delete_poll))
        .with_state(state)
}
