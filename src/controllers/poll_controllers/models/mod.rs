use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::poll_models::{Poll, PollOption, PollType};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub poll_type: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    // A missing index falls through the range check as an out-of-range value.
    #[serde(default = "missing_option_index")]
    pub option_index: i64,
}

fn missing_option_index() -> i64 {
    -1
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub poll_type: PollType,
    pub is_closed: bool,
    pub total_votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.to_hex(),
            question: poll.question,
            options: poll.options,
            poll_type: poll.poll_type,
            is_closed: poll.is_closed,
            total_votes: poll.total_votes,
            created_at: poll.created_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ClosePollResponse {
    pub message: String,
    pub poll: PollResponse,
}

#[derive(Serialize, Debug)]
pub struct DeletePollResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_fields_default_when_missing() {
        let request: CreatePollRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.question, "");
        assert!(request.options.is_empty());
        assert_eq!(request.poll_type, "");
    }

    #[test]
    fn create_request_uses_camel_case_keys() {
        let request: CreatePollRequest = serde_json::from_str(
            r#"{"question":"Pizza?","options":["Yes","No"],"pollType":"yes/no"}"#,
        )
        .unwrap();
        assert_eq!(request.poll_type, "yes/no");
        assert_eq!(request.options, vec!["Yes", "No"]);
    }

    #[test]
    fn vote_request_defaults_to_out_of_range_index() {
        let request: CastVoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.option_index, -1);

        let request: CastVoteRequest = serde_json::from_str(r#"{"optionIndex":2}"#).unwrap();
        assert_eq!(request.option_index, 2);
    }

    #[test]
    fn poll_response_serializes_camel_case() {
        let poll = Poll::new(
            "Pizza?".to_string(),
            vec!["Yes".to_string(), "No".to_string()],
            "yes/no",
        )
        .unwrap();
        let response = PollResponse::from(poll.clone());
        assert_eq!(response.id, poll.id.to_hex());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["pollType"], "yes/no");
        assert_eq!(value["totalVotes"], 0);
        assert_eq!(value["isClosed"], false);
        assert!(value["createdAt"].is_string());
        assert_eq!(value["options"][0]["votes"], 0);
    }
}
