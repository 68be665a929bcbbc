use serenity::all::{Context, Message};

use crate::reply::{match_reply, normalize, AutoReplyRule};

/// Handles message creation: runs the keyword matcher over the normalized
/// text and sends the selected auto-reply, if any.
pub async fn handle_message(rules: &[AutoReplyRule], ctx: Context, message: Message) {
    // Never answer other bots (or ourselves)
    if message.author.bot {
        return;
    }

    let normalized = normalize(Some(&message.content));

    let Some(reply) = match_reply(&normalized, rules) else {
        return;
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to send auto-reply in channel {}: {:?}",
            message.channel_id,
            e
        );
    }
}
