use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};

use crate::controllers::poll_controllers::models::{CastVoteRequest, PollResponse};
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> AppResult<Json<PollResponse>> {
    let coll = state.db.collection::<Poll>("polls");

    let obj_id = ObjectId::parse_str(&poll_id)
        .map_err(|_| AppError::ValidationError("Invalid pollId format".to_string()))?;

    let poll = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    if !poll.has_option_index(payload.option_index) {
        return Err(AppError::ValidationError(
            "Invalid option index".to_string(),
        ));
    }

    // Both counters move in a single server-side $inc, so concurrent votes
    // on the same poll cannot clobber each other. Options are immutable
    // after creation, which keeps the index check above valid.
    let votes_field = format!("options.{}.votes", payload.option_index);
    let update_result = coll
        .update_one(
            doc! { "_id": obj_id },
            doc! { "$inc": { votes_field: 1, "total_votes": 1 } },
        )
        .await?;

    if update_result.matched_count == 0 {
        return Err(AppError::NotFound("Poll not found".to_string()));
    }
    if update_result.modified_count == 0 {
        return Err(AppError::InternalError(
            "Failed to increment vote for option".to_string(),
        ));
    }

    let updated_poll = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    Ok(Json(PollResponse::from(updated_poll)))
}
