//! Platform-neutral embed payload exchanged between the form trigger and the
//! delivery endpoint.
//!
//! The payload mirrors the subset of Discord's embed shape the relay supports.
//! It is created fresh per submission and discarded once the message is posted.

use serde::{Deserialize, Serialize};

/// A single name/value pair rendered inside the embed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Embed footer, accepted either as a bare string or as a structured object
/// with optional icon.
///
/// The wire format historically allowed both shapes; they are unified here and
/// normalized once at message-build time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EmbedFooter {
    Text(String),
    Structured {
        text: String,
        #[serde(default, rename = "iconURL", skip_serializing_if = "Option::is_none")]
        icon_url: Option<String>,
    },
}

/// Structured notification payload for one form submission.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EmbedPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RGB color as a single integer, e.g. `0x0099ff`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// ISO-8601 submission timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
