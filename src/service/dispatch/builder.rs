//! Discord message construction for form submissions.
//!
//! Translates the platform-neutral `EmbedPayload` 1:1 into serenity builders
//! and attaches the Allow/Deny review buttons. Discord-imposed limits (field
//! counts, value lengths) are left to the API to enforce.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateMessage,
    Timestamp,
};

use crate::model::embed::{EmbedFooter, EmbedPayload};
use crate::service::formatter::{NO_RESPONSE_PLACEHOLDER, SUBMISSION_COLOR};

/// Custom id a separate bot process listens for to approve a submission.
pub const ALLOW_BUTTON_ID: &str = "form_allow";
/// Custom id a separate bot process listens for to reject a submission.
pub const DENY_BUTTON_ID: &str = "form_deny";

const DEFAULT_TITLE: &str = "Form Submission";

/// Builds the embed for a submission payload.
///
/// Fields are carried over in order and text unchanged, except that an empty
/// value is replaced by the standard placeholder since Discord rejects blank
/// field values. Missing title/color fall back to the submission defaults; an
/// unparseable or missing timestamp falls back to the current time.
pub fn build_submission_embed(payload: &EmbedPayload) -> CreateEmbed {
    let timestamp = payload
        .timestamp
        .as_deref()
        .and_then(|raw| Timestamp::parse(raw).ok())
        .unwrap_or_else(Timestamp::now);

    let mut embed = CreateEmbed::new()
        .color(payload.color.unwrap_or(SUBMISSION_COLOR))
        .title(payload.title.as_deref().unwrap_or(DEFAULT_TITLE))
        .description(payload.description.as_deref().unwrap_or_default())
        .timestamp(timestamp);

    for field in &payload.fields {
        let value = if field.value.trim().is_empty() {
            NO_RESPONSE_PLACEHOLDER
        } else {
            field.value.as_str()
        };
        embed = embed.field(&field.name, value, field.inline);
    }

    if let Some(thumbnail) = &payload.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    if let Some(image) = &payload.image {
        embed = embed.image(image);
    }

    if let Some(footer) = &payload.footer {
        embed = embed.footer(normalize_footer(footer));
    }

    embed
}

/// Normalizes the two accepted footer shapes into one serenity footer.
fn normalize_footer(footer: &EmbedFooter) -> CreateEmbedFooter {
    match footer {
        EmbedFooter::Text(text) => CreateEmbedFooter::new(text),
        EmbedFooter::Structured { text, icon_url } => {
            let mut built = CreateEmbedFooter::new(text);
            if let Some(icon_url) = icon_url {
                built = built.icon_url(icon_url);
            }
            built
        }
    }
}

/// Builds the Allow/Deny action row.
///
/// The relay only renders the buttons; handling the clicks belongs to the main
/// bot process listening for these custom ids.
pub fn build_review_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ALLOW_BUTTON_ID)
            .label("Allow")
            .style(ButtonStyle::Success),
        CreateButton::new(DENY_BUTTON_ID)
            .label("Deny")
            .style(ButtonStyle::Danger),
    ])
}

/// Builds the complete message: one embed, one action row.
pub fn build_submission_message(payload: &EmbedPayload) -> CreateMessage {
    CreateMessage::new()
        .embed(build_submission_embed(payload))
        .components(vec![build_review_buttons()])
}
