use axum::{extract::State, http::StatusCode, Json};

use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn create_poll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<(StatusCode, Json<PollResponse>)> {
    let coll = state.db.collection::<Poll>("polls");

    let poll = Poll::new(payload.question, payload.options, &payload.poll_type)?;

    coll.insert_one(&poll).await?;

    Ok((StatusCode::CREATED, Json(PollResponse::from(poll))))
}
