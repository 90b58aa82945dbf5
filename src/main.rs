use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use form_relay::{
    bot::DiscordGateway,
    config::Config,
    error::AppError,
    router,
    service::dispatch::DiscordDispatcher,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The gateway logs in lazily on the first submission, not here, so a
    // misconfigured token surfaces in the request path instead of at boot.
    let gateway = DiscordGateway::new(config.discord_token.clone());
    let dispatcher = Arc::new(DiscordDispatcher::new(gateway, config.channel_id.clone()));

    let app = router::router().with_state(AppState::new(config.api_secret.clone(), dispatcher));

    tracing::info!("Starting server on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
