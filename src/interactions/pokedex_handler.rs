//! Handles the previous/next buttons on a Pokedex message.
//!
//! Clicks from anyone but the requester, or on a message whose session is gone, get no
//! response at all. A failed lookup leaves the old page and the session untouched and
//! tells the requester privately.

use super::ids::nav_direction;
use super::util::{defer_component, edit_component, followup_ephemeral};
use crate::AppState;
use crate::commands::pokedex::ui::{create_nav_row, create_pokedex_embed};
use crate::ui::style::error_embed;
use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use tracing::{debug, error, instrument};

pub const TURN_FAILED: &str = "An error occurred while processing your request.";

#[instrument(level = "debug", skip(ctx, component, app_state), fields(user_id = component.user.id.get(), cid = %component.data.custom_id))]
pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    let Some(direction) = nav_direction(&component.data.custom_id) else {
        return;
    };
    let Some((session, gate)) = app_state.sessions.entry(component.message.id).await else {
        debug!(target = "pokedex.session", "click on a message without a live session");
        return;
    };

    // Screened without the session lock and acked before waiting on any turn already
    // in flight. Rejected clicks stay unacknowledged.
    if let Err(reason) = gate.admit(component.user.id) {
        debug!(target = "pokedex.session", %reason, "click ignored");
        return;
    }
    defer_component(ctx, component).await;

    // Held for the rest of the turn so overlapping clicks render in order.
    let mut session = session.lock().await;
    let target = match session.begin_turn(component.user.id, direction) {
        Ok(target) => target,
        Err(reason) => {
            debug!(target = "pokedex.session", %reason, "session ended while click was queued");
            return;
        }
    };

    match app_state.lookup(&session.player_name, target).await {
        Ok(page) => {
            let builder = EditInteractionResponse::new()
                .embed(create_pokedex_embed(&page))
                .components(vec![create_nav_row()]);
            if edit_component(ctx, component, "pokedex.turn", builder).await {
                session.apply(&page);
            }
        }
        Err(e) => {
            error!(target = "pokedex.session", player = %session.player_name, page = target, error = %e, "page turn failed");
            followup_ephemeral(ctx, component, error_embed("Pokedex", TURN_FAILED)).await;
        }
    }
}
