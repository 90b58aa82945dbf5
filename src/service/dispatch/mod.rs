//! Submission dispatch to Discord.
//!
//! This module owns the step between an authenticated request and the chat
//! platform: looking up the destination channel and posting the rendered
//! message. The `SubmissionDispatcher` trait is the seam request handlers talk
//! through; `DiscordDispatcher` is the production implementation.

pub mod builder;

use serenity::all::ChannelId;
use serenity::async_trait;
use serenity::http::HttpError;

use crate::{bot::DiscordGateway, error::AppError, model::embed::EmbedPayload};

use builder::build_submission_message;

/// Identifiers of the message created for a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReceipt {
    pub message_id: String,
    pub channel_id: String,
}

/// Posts one embed payload as an interactive message.
///
/// One call per form submission; implementations hold whatever connection state
/// they need and must be shareable across concurrent requests.
#[async_trait]
pub trait SubmissionDispatcher: Send + Sync {
    async fn dispatch(&self, embed: &EmbedPayload) -> Result<DispatchReceipt, AppError>;
}

/// Dispatcher that posts submissions through the shared Discord gateway.
pub struct DiscordDispatcher {
    gateway: DiscordGateway,
    channel_id: Option<String>,
}

impl DiscordDispatcher {
    /// Creates a new DiscordDispatcher.
    ///
    /// # Arguments
    /// - `gateway` - Lazily connected Discord gateway handle
    /// - `channel_id` - Configured destination channel, if any; a missing value
    ///   is reported per-dispatch rather than at construction
    pub fn new(gateway: DiscordGateway, channel_id: Option<String>) -> Self {
        Self {
            gateway,
            channel_id,
        }
    }
}

#[async_trait]
impl SubmissionDispatcher for DiscordDispatcher {
    /// Posts the embed with Allow/Deny buttons to the configured channel.
    ///
    /// Verifies the channel exists before sending so an unknown channel is a
    /// 404 to the caller rather than an opaque send failure.
    ///
    /// # Returns
    /// - `Ok(DispatchReceipt)` - Message posted; carries message and channel ids
    /// - `Err(AppError::ChannelNotConfigured)` - No destination channel configured
    /// - `Err(AppError::NotFound)` - Channel id unknown to Discord
    /// - `Err(AppError)` - Login failure or any other Discord API error
    async fn dispatch(&self, embed: &EmbedPayload) -> Result<DispatchReceipt, AppError> {
        let Some(channel_id) = &self.channel_id else {
            return Err(AppError::ChannelNotConfigured);
        };

        let channel_id: u64 = channel_id.parse().map_err(|_| {
            AppError::InternalError(format!(
                "FORM_SUBMISSION_CHANNEL_ID '{channel_id}' is not a valid channel id"
            ))
        })?;
        if channel_id == 0 {
            return Err(AppError::InternalError(
                "FORM_SUBMISSION_CHANNEL_ID must not be zero".to_string(),
            ));
        }
        let channel = ChannelId::new(channel_id);

        let http = self.gateway.http().await?;

        http.get_channel(channel).await.map_err(map_channel_error)?;

        let message = channel
            .send_message(http.as_ref(), build_submission_message(embed))
            .await?;

        tracing::info!("Posted form submission as message {}", message.id);

        Ok(DispatchReceipt {
            message_id: message.id.to_string(),
            channel_id: channel.to_string(),
        })
    }
}

/// Maps a channel-lookup failure, turning Discord's 404 into the endpoint's own.
fn map_channel_error(err: serenity::Error) -> AppError {
    match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404 =>
        {
            AppError::NotFound("Channel not found - check FORM_SUBMISSION_CHANNEL_ID".to_string())
        }
        _ => err.into(),
    }
}
