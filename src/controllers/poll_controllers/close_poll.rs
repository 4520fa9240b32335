use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};

use crate::controllers::poll_controllers::models::{ClosePollResponse, PollResponse};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

// Closing is one-way and repeatable: a second close matches the document
// again and leaves it closed.
pub async fn close_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ClosePollResponse>> {
    let coll = state.db.collection::<Poll>("polls");

    let obj_id = ObjectId::parse_str(&poll_id)
        .map_err(|_| AppError::ValidationError("Invalid pollId format".to_string()))?;

    let update_result = coll
        .update_one(doc! { "_id": obj_id }, doc! { "$set": { "is_closed": true } })
        .await?;

    if update_result.matched_count == 0 {
        return Err(AppError::NotFound("Poll not found".to_string()));
    }

    let poll = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(ClosePollResponse {
        message: "Poll closed successfully".to_string(),
        poll: PollResponse::from(poll),
    }))
}
