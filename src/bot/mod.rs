//! Lazily initialized Discord gateway handle.
//!
//! The relay only ever posts messages, but Discord requires a logged-in gateway
//! session for the bot user to be considered online, so the client is started
//! once per process and its HTTP handle shared across requests. Initialization
//! happens on the first dispatch rather than at startup and is guarded by a
//! one-time async barrier, so concurrent cold-start requests cannot race into
//! duplicate logins.

use std::sync::Arc;
use std::sync::Mutex;

use serenity::all::{Client, Context, EventHandler, GatewayIntents, Ready};
use serenity::async_trait;
use serenity::http::Http;
use tokio::sync::{oneshot, OnceCell};

use crate::error::AppError;

/// Discord bot event handler that reports the one-time ready signal.
struct ReadyNotifier {
    ready_tx: Mutex<Option<oneshot::Sender<String>>>,
}

#[async_trait]
impl EventHandler for ReadyNotifier {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord", ready.user.name);

        // The gateway may re-emit ready after reconnects; only the first one
        // completes the barrier.
        if let Ok(mut guard) = self.ready_tx.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(ready.user.name.clone());
            }
        }
    }
}

/// Process-wide Discord connection, created on first use.
pub struct DiscordGateway {
    token: String,
    http: OnceCell<Arc<Http>>,
}

impl DiscordGateway {
    pub fn new(token: String) -> Self {
        Self {
            token,
            http: OnceCell::new(),
        }
    }

    /// Returns the shared Discord HTTP handle, logging in on first call.
    ///
    /// The first caller builds the serenity client, spawns its gateway task,
    /// and waits for the ready event; concurrent callers suspend on the same
    /// initialization and reuse the cached handle afterwards.
    ///
    /// # Returns
    /// - `Ok(Arc<Http>)` - Connected Discord HTTP client
    /// - `Err(AppError)` - Login failed or the gateway shut down before ready
    pub async fn http(&self) -> Result<Arc<Http>, AppError> {
        self.http
            .get_or_try_init(|| self.connect())
            .await
            .map(Arc::clone)
    }

    async fn connect(&self) -> Result<Arc<Http>, AppError> {
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

        let (ready_tx, ready_rx) = oneshot::channel();
        let handler = ReadyNotifier {
            ready_tx: Mutex::new(Some(ready_tx)),
        };

        let mut client = Client::builder(&self.token, intents)
            .event_handler(handler)
            .await?;

        let http = client.http.clone();

        tracing::info!("Starting Discord gateway");

        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                tracing::error!("Discord gateway error: {}", e);
            }
        });

        // If the gateway task dies before ready (e.g. invalid token), the
        // sender is dropped and the await fails instead of hanging.
        ready_rx.await.map_err(|_| {
            AppError::InternalError(
                "Discord client shut down before becoming ready, check DISCORD_TOKEN".to_string(),
            )
        })?;

        Ok(http)
    }
}
