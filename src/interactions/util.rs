//! Shared interaction utility helpers (single defer + safe edit/followup wrappers).
use serenity::builder::{CreateEmbed, CreateInteractionResponseFollowup, EditInteractionResponse};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// Acknowledge a component interaction (non-ephemeral) ignoring duplicate/late errors.
pub async fn defer_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c.defer(&ctx.http).await {
        tracing::debug!(target="ui.defer", cid=%c.data.custom_id, error=?e, "defer failed (already acknowledged?)");
    }
}

/// Edit the message the component is attached to. Logs failure with a tag and
/// reports whether the edit landed.
pub async fn edit_component(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    builder: EditInteractionResponse,
) -> bool {
    match c.edit_response(&ctx.http, builder).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(target="ui.edit", cid=%c.data.custom_id, tag=%tag, error=?e, "edit_response failed");
            false
        }
    }
}

/// Send a notice only the clicking user can see. Usable after a defer.
pub async fn followup_ephemeral(ctx: &Context, c: &ComponentInteraction, embed: CreateEmbed) {
    let builder = CreateInteractionResponseFollowup::new()
        .embed(embed)
        .ephemeral(true);
    if let Err(e) = c.create_followup(&ctx.http, builder).await {
        tracing::error!(target="ui.followup", cid=%c.data.custom_id, error=?e, "ephemeral followup failed");
    }
}
