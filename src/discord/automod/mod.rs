// Discord side of automod.
// - `message_filter.rs` runs every guild message through the core service.
// - `commands.rs` exposes `/automod add|remove|list` to moderators.
// - `settings.rs` holds the Discord ids those two need.

pub mod commands;
pub mod message_filter;
pub mod settings;

pub use settings::AutomodSettings;
