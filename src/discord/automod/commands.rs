// Automod slash commands for managing the banned-word list.
//
// Thin layer: gather the words, call the core service, format the reply.
// Every reply is ephemeral so the list never shows up in public channels.

use super::message_filter::{clip_description, EMBED_DESCRIPTION_LIMIT};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Manage the automod banned-word list.
#[poise::command(
    slash_command,
    guild_only,
    subcommands("add", "remove", "list"),
    subcommand_required
)]
pub async fn automod(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Add up to three words to the banned list.
#[poise::command(slash_command, guild_only, check = "has_mod_role")]
pub async fn add(
    ctx: Context<'_>,
    #[description = "Word to ban"] word1: Option<String>,
    #[description = "Another word to ban"] word2: Option<String>,
    #[description = "Another word to ban"] word3: Option<String>,
) -> Result<(), Error> {
    let words = match parse_word_options([word1, word2, word3]) {
        WordInput::Missing => {
            return reply_ephemeral(ctx, "❌ You must specify at least one word to add.").await;
        }
        WordInput::Blank => return reply_ephemeral(ctx, "❌ No valid words provided.").await,
        WordInput::Words(words) => words,
    };

    let added = ctx.data().automod.add_many(&words).await;

    let content = if added.is_empty() {
        "ℹ️ Nothing added: already listed or no letters or digits.".to_string()
    } else {
        format!("✅ Added to automod list: `{}`", added.join("`, `"))
    };
    reply_ephemeral(ctx, content).await
}

/// Remove up to three words from the banned list.
#[poise::command(slash_command, guild_only, check = "has_mod_role")]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Word to unban"] word1: Option<String>,
    #[description = "Another word to unban"] word2: Option<String>,
    #[description = "Another word to unban"] word3: Option<String>,
) -> Result<(), Error> {
    let words = match parse_word_options([word1, word2, word3]) {
        WordInput::Missing => {
            return reply_ephemeral(ctx, "❌ You must specify at least one word to remove.").await;
        }
        WordInput::Blank => return reply_ephemeral(ctx, "❌ No valid words provided.").await,
        WordInput::Words(words) => words,
    };

    let removed = ctx.data().automod.remove_many(&words).await;

    let content = if removed.is_empty() {
        "ℹ️ None of the provided words were in the automod list.".to_string()
    } else {
        format!("✅ Removed {} word(s) from the automod list.", removed.len())
    };
    reply_ephemeral(ctx, content).await
}

/// Show the banned list.
#[poise::command(slash_command, guild_only, check = "has_mod_role")]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    let words = ctx.data().automod.list();
    if words.is_empty() {
        return reply_ephemeral(ctx, "ℹ️ The automod banned words list is currently empty.").await;
    }

    let config = ctx.data().automod.config();
    let embed = serenity::CreateEmbed::new()
        .title("🛡️ Automod Banned Words")
        .description(clip_description(&words.join(", "), EMBED_DESCRIPTION_LIMIT))
        .color(0xD13838)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "{} word(s) • fuzzy tolerance: {} edit(s) for {}+ letters, {} below",
            words.len(),
            config.long_term_max_edits,
            config.long_term_min_len,
            config.short_term_max_edits
        )))
        .timestamp(serenity::Timestamp::now());

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true)).await?;
    Ok(())
}

/// Only members holding a configured mod role may touch the list.
async fn has_mod_role(ctx: Context<'_>) -> Result<bool, Error> {
    let allowed = match ctx.author_member().await {
        Some(member) => member
            .roles
            .iter()
            .any(|role| ctx.data().automod_settings.is_mod_role(role.get())),
        None => false,
    };

    if !allowed {
        reply_ephemeral(ctx, "❌ You do not have permission to manage automod.").await?;
    }

    Ok(allowed)
}

async fn reply_ephemeral(ctx: Context<'_>, content: impl Into<String>) -> Result<(), Error> {
    ctx.send(poise::CreateReply::default().content(content).ephemeral(true)).await?;
    Ok(())
}

/// What the admin filled into the word options.
#[derive(Debug, PartialEq)]
enum WordInput {
    /// No option was given at all
    Missing,
    /// Options were given but were all blank
    Blank,
    /// Trimmed, non-blank words
    Words(Vec<String>),
}

fn parse_word_options(options: [Option<String>; 3]) -> WordInput {
    if options.iter().all(Option::is_none) {
        return WordInput::Missing;
    }

    let words: Vec<String> = options
        .into_iter()
        .flatten()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        WordInput::Blank
    } else {
        WordInput::Words(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_options() {
        let input = parse_word_options([None, Some(" cat ".to_string()), Some("Dog".to_string())]);
        assert_eq!(input, WordInput::Words(vec!["cat".to_string(), "Dog".to_string()]));
    }

    #[test]
    fn test_no_options_given() {
        assert_eq!(parse_word_options([None, None, None]), WordInput::Missing);
    }

    #[test]
    fn test_only_blank_options() {
        let input = parse_word_options([Some("   ".to_string()), Some(String::new()), None]);
        assert_eq!(input, WordInput::Blank);
    }
}
