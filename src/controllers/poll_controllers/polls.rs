use axum::{extract::State, Json};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_all_polls(State(state): State<AppState>) -> AppResult<Json<Vec<PollResponse>>> {
    let coll = state.db.collection::<Poll>("polls");

    let mut cursor = coll.find(doc! {}).await?;

    let mut polls = Vec::new();
    while let Some(poll) = cursor.try_next().await? {
        polls.push(PollResponse::from(poll));
    }

    Ok(Json(polls))
}
