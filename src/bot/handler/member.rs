use serenity::all::{ChannelId, Context, CreateAttachment, CreateMessage, Member, Mentionable};

use crate::config::Config;
use crate::welcome::{avatar_png_url, WelcomeCard, WelcomeCardClient, WELCOME_BACKGROUND};

/// Handles the guild_member_addition event when a member joins the guild.
///
/// Fetches a rendered welcome card and posts it with a greeting to the
/// configured welcome channel. If the channel is not present in the guild,
/// the event is silently ignored. Card fetch and message send failures are
/// logged and the greeting is skipped; nothing surfaces to the new member.
pub async fn handle_guild_member_addition(
    config: &Config,
    welcome: &WelcomeCardClient,
    ctx: Context,
    new_member: Member,
) {
    let welcome_channel = ChannelId::new(config.welcome_channel_id);

    // Cache reads are scoped so the guard is released before any await
    let Some((guild_name, member_count)) = ctx.cache.guild(new_member.guild_id).and_then(|guild| {
        guild
            .channels
            .contains_key(&welcome_channel)
            .then(|| (guild.name.clone(), guild.member_count))
    }) else {
        return;
    };

    let card = WelcomeCard {
        avatar_url: avatar_png_url(&new_member.user.face()),
        username: new_member.user.name.clone(),
        guild_name: guild_name.clone(),
        member_count,
        background: WELCOME_BACKGROUND.to_string(),
    };

    let image = match welcome.fetch(&card).await {
        Ok(image) => image,
        Err(e) => {
            tracing::error!("Welcome card error for {}: {}", new_member.user.name, e);
            return;
        }
    };

    let greeting = CreateMessage::new()
        .content(format!("🔥 مرحباً {} ❤️", new_member.mention()))
        .add_file(CreateAttachment::bytes(image, "welcome.png"));

    if let Err(e) = welcome_channel.send_message(&ctx.http, greeting).await {
        tracing::error!(
            "Failed to send welcome message in channel {}: {:?}",
            welcome_channel,
            e
        );
    } else {
        tracing::info!("Welcomed {} to {}", new_member.user.name, guild_name);
    }
}
