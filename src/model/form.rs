//! Raw form-submission data as delivered by the form event source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The answer to a single form question.
///
/// Checkbox-style questions deliver a list of selected choices, everything else
/// a single string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(Vec<String>),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

/// One question/answer pair from a form response, in form order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormAnswer {
    pub question: String,
    pub answer: AnswerValue,
}

/// A complete form response as handed over by the submission trigger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub form_title: String,
    pub responses: Vec<FormAnswer>,
    /// Only present when the form collects email addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
