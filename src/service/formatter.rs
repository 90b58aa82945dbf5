//! Notification formatter.
//!
//! Pure transformation of a raw form response into the embed payload the
//! delivery endpoint accepts. Mirrors what the form-side trigger script sends,
//! so a payload produced here is byte-for-byte compatible with payloads arriving
//! from the real form.

use crate::model::{
    embed::{EmbedField, EmbedFooter, EmbedPayload},
    form::{AnswerValue, FormSubmission},
};

/// Placeholder substituted for questions the respondent left unanswered.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response";

/// Embed color for form submission notifications (blue).
pub const SUBMISSION_COLOR: u32 = 0x0099ff;

const SUBMISSION_DESCRIPTION: &str =
    "A new form response has been submitted and requires review.";

/// Builds the notification payload for one form submission.
///
/// One embed field is produced per answer, in form order, with choice lists
/// joined by `", "` and empty answers replaced by [`NO_RESPONSE_PLACEHOLDER`].
/// The respondent email, when the form collects it, is appended as a final
/// "Submitted by" field.
pub fn format_submission(submission: &FormSubmission) -> EmbedPayload {
    let mut fields: Vec<EmbedField> = submission
        .responses
        .iter()
        .map(|response| EmbedField {
            name: response.question.clone(),
            value: format_answer(&response.answer),
            inline: false,
        })
        .collect();

    if let Some(email) = &submission.respondent_email {
        fields.push(EmbedField {
            name: "Submitted by".to_string(),
            value: email.clone(),
            inline: false,
        });
    }

    EmbedPayload {
        title: Some(format!("📋 {}", submission.form_title)),
        description: Some(SUBMISSION_DESCRIPTION.to_string()),
        color: Some(SUBMISSION_COLOR),
        fields,
        thumbnail: None,
        image: None,
        footer: Some(EmbedFooter::Text(format!(
            "Submitted at {}",
            submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
        ))),
        timestamp: Some(submission.submitted_at.to_rfc3339()),
    }
}

/// Stringifies an answer, joining multi-choice values with `", "`.
///
/// Empty and whitespace-only answers map to [`NO_RESPONSE_PLACEHOLDER`] so the
/// embed field value is never blank, which Discord rejects.
fn format_answer(answer: &AnswerValue) -> String {
    let text = match answer {
        AnswerValue::Text(value) => value.clone(),
        AnswerValue::Choices(values) => values.join(", "),
    };

    if text.trim().is_empty() {
        NO_RESPONSE_PLACEHOLDER.to_string()
    } else {
        text
    }
}
