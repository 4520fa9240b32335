use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question: String,
    pub options: Vec<PollOption>,
    pub poll_type: PollType,
    pub is_closed: bool,
    pub total_votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollOption {
    pub text: String,
    pub votes: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PollType {
    #[serde(rename = "yes/no")]
    YesNo,
    #[serde(rename = "single choice")]
    SingleChoice,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "image-based")]
    ImageBased,
    #[serde(rename = "open-ended")]
    OpenEnded,
}

impl PollType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes/no" => Some(Self::YesNo),
            "single choice" => Some(Self::SingleChoice),
            "rating" => Some(Self::Rating),
            "image-based" => Some(Self::ImageBased),
            "open-ended" => Some(Self::OpenEnded),
            _ => None,
        }
    }
}

impl Poll {
    /// Validates the raw request fields and builds a fresh poll with zeroed
    /// counters. Checks run in a fixed order and the first failure wins.
    pub fn new(question: String, options: Vec<String>, poll_type: &str) -> AppResult<Self> {
        if question.is_empty() {
            return Err(AppError::ValidationError("Question is required".to_string()));
        }

        let poll_type = PollType::parse(poll_type)
            .ok_or_else(|| AppError::ValidationError("Invalid or missing poll type".to_string()))?;

        let options = build_options(poll_type, options)?;

        Ok(Poll {
            id: ObjectId::new(),
            question,
            options,
            poll_type,
            is_closed: false,
            total_votes: 0,
            created_at: Utc::now(),
        })
    }

    pub fn has_option_index(&self, index: i64) -> bool {
        index >= 0 && (index as usize) < self.options.len()
    }
}

fn build_options(poll_type: PollType, raw: Vec<String>) -> AppResult<Vec<PollOption>> {
    // Open-ended polls never carry options, whatever the client sent.
    if poll_type == PollType::OpenEnded {
        return Ok(Vec::new());
    }

    if raw.len() < 2 {
        return Err(AppError::ValidationError(
            "At least two options are required".to_string(),
        ));
    }

    match poll_type {
        PollType::YesNo if raw.len() != 2 => {
            return Err(AppError::ValidationError(
                "'Yes/No' polls must have exactly two options".to_string(),
            ));
        }
        PollType::Rating if raw.iter().any(|opt| leading_int(opt).is_none()) => {
            return Err(AppError::ValidationError(
                "'Rating' polls must have numeric options".to_string(),
            ));
        }
        PollType::ImageBased if raw.iter().any(|opt| Url::parse(opt).is_err()) => {
            return Err(AppError::ValidationError(
                "'Image-based' polls must have valid image URLs as options".to_string(),
            ));
        }
        _ => {}
    }

    Ok(raw
        .into_iter()
        .map(|text| PollOption { text, votes: 0 })
        .collect())
}

/// Leading base-10 integer of a rating option, if any. Parsing is loose:
/// surrounding whitespace and a trailing suffix are ignored, so "5abc"
/// counts as numeric while "abc" does not.
fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() {
        return None;
    }

    prefix.parse::<i64>().ok().map(|n| sign * n)
}
