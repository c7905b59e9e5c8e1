// Discord layer - commands and event handlers.

#[path = "automod/mod.rs"]
pub mod automod;

use crate::core::automod::AutomodService;
use crate::infra::automod::JsonWordStore;
use std::sync::Arc;

/// Shared state handed to every command and event.
pub struct Data {
    pub automod: Arc<AutomodService<JsonWordStore>>,
    pub automod_settings: automod::AutomodSettings,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
