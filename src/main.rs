use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use kinobot::bot;
use kinobot::config::BotConfig;
use kinobot::context::BotContext;
use kinobot::dialogue::GenreDialogueState;

/// Initialize the tracing subscriber, JSON output when `LOG_FORMAT=json`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_tracing();

    info!("Starting Kinobot");

    // Load configuration, refusing to start without credentials
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        catalog_url = %config.catalog_api_url,
        timeout_secs = config.catalog_timeout.as_secs(),
        default_language = %config.default_language,
        "Configuration loaded"
    );

    let ctx = Arc::new(BotContext::from_config(&config)?);

    // Initialize the bot
    let bot = Bot::new(config.telegram_bot_token.clone());

    let start_description = ctx
        .localization
        .t_lang("command-start-description", Some(config.default_language.as_str()));
    if let Err(e) = bot
        .set_my_commands(vec![BotCommand::new("start", start_description)])
        .await
    {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<GenreDialogueState>, GenreDialogueState>()
        .endpoint(bot::message_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<GenreDialogueState>::new(),
            ctx
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");

    Ok(())
}
