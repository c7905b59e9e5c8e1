// Discord-specific banned-word handling - runs messages through the core
// automod service and turns hits into a deletion plus a log embed.

use crate::core::automod::MatchVerdict;
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

/// Longest embed description we'll send (Discord caps it at 4096).
pub const EMBED_DESCRIPTION_LIMIT: usize = 4000;

/// Cut `text` down to `limit` chars, ending in an ellipsis if it was cut.
pub fn clip_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(limit.saturating_sub(30)).collect();
    clipped.push('…');
    clipped
}

/// Check a message for banned words and act on a hit.
///
/// Returns `true` if the message was caught.
pub async fn handle_message_for_banned_words(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<bool, Error> {
    // Skip bots
    if msg.author.bot {
        return Ok(false);
    }

    // Only check guild messages
    let guild_id = match msg.guild_id {
        Some(id) => id.get(),
        None => return Ok(false),
    };

    if msg.content.is_empty() {
        return Ok(false);
    }

    // Exempt role bypasses the filter entirely
    if let Some(exempt_role) = data.automod_settings.exempt_role_id {
        let exempt = msg
            .member
            .as_ref()
            .is_some_and(|m| m.roles.iter().any(|r| r.get() == exempt_role));
        if exempt {
            return Ok(false);
        }
    }

    let verdict = data.automod.evaluate(&msg.content);
    let MatchVerdict::Hit { tier, term, .. } = &verdict else {
        return Ok(false);
    };

    tracing::info!(
        guild_id,
        channel_id = msg.channel_id.get(),
        user_id = msg.author.id.get(),
        tier = %tier,
        term = %term,
        verdict = %verdict.audit_json(),
        "Deleting message with banned word"
    );

    if let Err(e) = msg.delete(&ctx.http).await {
        tracing::warn!("Failed to delete banned message: {}", e);
    }

    if let Some(log_channel) = data.automod_settings.log_channel_id {
        let embed = deletion_report(msg, &verdict);
        if let Err(e) = serenity::ChannelId::new(log_channel)
            .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!("Failed to send automod log embed: {}", e);
        }
    }

    Ok(true)
}

/// Build the moderator-facing report for a deleted message.
fn deletion_report(msg: &serenity::Message, verdict: &MatchVerdict) -> serenity::CreateEmbed {
    let description = format!(
        "A message was deleted in <#{}>.\n\n\
         **User:** <@{}> `({})`\n\n\
         **Original message:**\n`{}`",
        msg.channel_id,
        msg.author.id,
        msg.author.id,
        msg.content
    );

    let mut embed = serenity::CreateEmbed::new()
        .title("⚠️ Deleted Banned Message")
        .color(0xD13838)
        .description(clip_description(&description, EMBED_DESCRIPTION_LIMIT))
        .thumbnail(msg.author.face())
        .timestamp(serenity::Timestamp::now());

    if let Some(tier) = verdict.tier() {
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Caught by the {} filter",
            tier
        )));
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_text_untouched() {
        assert_eq!(clip_description("cat, dog", 4000), "cat, dog");
    }

    #[test]
    fn test_clip_long_text() {
        let long = "a".repeat(5000);
        let clipped = clip_description(&long, 4000);
        assert_eq!(clipped.chars().count(), 3971);
        assert!(clipped.ends_with('…'));
    }
}
