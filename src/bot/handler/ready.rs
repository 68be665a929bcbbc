use serenity::all::{ChannelId, Context, GuildId, Ready};

use crate::config::Config;

/// Handles the ready event: logs the identity and joins the configured
/// voice channel, if any.
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    let Some(voice_channel_id) = config.voice_channel_id else {
        return;
    };

    let Some(manager) = songbird::get(&ctx).await else {
        tracing::warn!("Voice manager not registered, skipping voice channel join");
        return;
    };

    let guild_id = GuildId::new(config.guild_id);

    match manager
        .join_gateway(guild_id, ChannelId::new(voice_channel_id))
        .await
    {
        Ok(_) => {
            // Presence only: sit in the channel deafened and muted
            if let Some(call) = manager.get(guild_id) {
                let mut call = call.lock().await;
                if let Err(e) = call.deafen(true).await {
                    tracing::warn!("Failed to self-deafen: {:?}", e);
                }
                if let Err(e) = call.mute(true).await {
                    tracing::warn!("Failed to self-mute: {:?}", e);
                }
            }

            tracing::info!("Joined voice channel {}", voice_channel_id);
        }
        Err(e) => tracing::error!("Failed to join voice channel {}: {:?}", voice_channel_id, e),
    }
}
