// This is the entry point of the automod bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (storage)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::automod::{AutomodConfig, AutomodService};
use crate::discord::automod::message_filter::handle_message_for_banned_words;
use crate::discord::automod::AutomodSettings;
use crate::discord::{Data, Error};
use crate::infra::automod::JsonWordStore;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_WORDS_PATH: &str = "data/bannedwords.json";

/// Event handler for non-command Discord events.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        // Filter errors shouldn't take the whole handler down
        if let Err(e) = handle_message_for_banned_words(ctx, new_message, data).await {
            tracing::error!("Error in automod handler: {}", e);
        }
    }

    Ok(())
}

/// Read a numeric env var, falling back to `default` if unset or invalid.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn automod_config_from_env() -> AutomodConfig {
    let defaults = AutomodConfig::default();
    AutomodConfig {
        long_term_min_len: env_or("AUTOMOD_FUZZY_MIN_LONG_LEN", defaults.long_term_min_len),
        long_term_max_edits: env_or("AUTOMOD_FUZZY_LONG_MAX_EDITS", defaults.long_term_max_edits),
        short_term_max_edits: env_or(
            "AUTOMOD_FUZZY_SHORT_MAX_EDITS",
            defaults.short_term_max_edits,
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening (RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get Discord bot token from environment
    let token = std::env::var("DISCORD_TOKEN").context(
        "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
    )?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // This is the "composition root" where we wire everything together.

    let words_path =
        std::env::var("AUTOMOD_WORDS_PATH").unwrap_or_else(|_| DEFAULT_WORDS_PATH.to_string());
    let word_store = JsonWordStore::new(&words_path);
    tracing::info!(path = %word_store.path().display(), "Using automod word list");

    let automod_service =
        Arc::new(AutomodService::load(word_store, automod_config_from_env()).await);

    let data = Data {
        automod: Arc::clone(&automod_service),
        automod_settings: AutomodSettings::from_env(),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![discord::automod::commands::automod()],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Bot is starting up...");

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                tracing::info!(
                    terms = data.automod.list().len(),
                    "Commands registered, bot is ready"
                );

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
