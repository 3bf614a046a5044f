//! Implements the run logic for the `pokedex` command: parse the player name and
//! page, run the lookup, send the first page with paging buttons and register a
//! session so the buttons work for the next 60 seconds.

use super::state::PokedexSession;
use super::ui::{create_nav_row, create_pokedex_embed};
use crate::AppState;
use crate::error::UsageError;
use crate::services::pokedex::PageResult;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateMessage, EditInteractionResponse, EditMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;
use tracing::{error, warn};

pub const LOOKUP_FAILED: &str = "Could not retrieve data for that player.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexArgs {
    pub player_name: String,
    pub page: i64,
}

/// Parse `<player> [page]` (the words after the command name). Extra words are ignored.
pub fn parse_args(args: &[&str]) -> Result<PokedexArgs, UsageError> {
    let player_name = args
        .first()
        .filter(|name| !name.is_empty())
        .ok_or(UsageError::MissingPlayer)?;
    let page = match args.get(1) {
        None => 1,
        Some(raw) => match raw.parse::<i64>() {
            Ok(page) if page >= 1 => page,
            _ => return Err(UsageError::InvalidPage(raw.to_string())),
        },
    };
    Ok(PokedexArgs {
        player_name: player_name.to_string(),
        page,
    })
}

pub fn register() -> CreateCommand {
    CreateCommand::new("pokedex")
        .description("List the Pokemon a player has not caught yet.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "player",
                "In-game player name",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "page",
                "Page to open. Defaults to 1.",
            )
            .required(false)
            .min_int_value(1),
        )
}

/// Register a session for a freshly sent page and arm its expiry, which strips the
/// buttons off the message.
async fn track_session(
    ctx: &Context,
    app_state: &AppState,
    requester: UserId,
    sent: &Message,
    first_page: &PageResult,
) {
    let http = ctx.http.clone();
    let channel_id = sent.channel_id;
    let message_id = sent.id;
    app_state
        .sessions
        .start(
            message_id,
            PokedexSession::new(requester, first_page),
            move || async move {
                let builder = EditMessage::new().components(vec![]);
                if let Err(e) = channel_id.edit_message(&http, message_id, builder).await {
                    warn!(target = "pokedex.session", message_id = %message_id, error = ?e, "failed to detach paging buttons");
                }
            },
        )
        .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(usage) => {
            msg.channel_id.say(&ctx.http, usage.to_string()).await.ok();
            return;
        }
    };
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let page = match app_state.lookup(&parsed.player_name, parsed.page).await {
        Ok(page) => page,
        Err(e) => {
            error!(target = "pokedex.command", player = %parsed.player_name, error = %e, "lookup failed");
            msg.channel_id.say(&ctx.http, LOOKUP_FAILED).await.ok();
            return;
        }
    };

    let builder = CreateMessage::new()
        .embed(create_pokedex_embed(&page))
        .components(vec![create_nav_row()])
        .reference_message(msg);
    let sent = match msg.channel_id.send_message(&ctx.http, builder).await {
        Ok(sent) => sent,
        Err(e) => {
            error!(target = "pokedex.command", error = ?e, "failed to send pokedex page");
            return;
        }
    };
    track_session(ctx, &app_state, msg.author.id, &sent, &page).await;
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let options = &interaction.data.options;
    let player = options
        .iter()
        .find(|o| o.name == "player")
        .and_then(|o| o.value.as_str())
        .unwrap_or("");
    let page = options
        .iter()
        .find(|o| o.name == "page")
        .and_then(|o| o.value.as_i64())
        .map(|p| p.to_string());
    let mut words = vec![player];
    if let Some(page) = page.as_deref() {
        words.push(page);
    }
    let parsed = match parse_args(&words) {
        Ok(parsed) => parsed,
        Err(usage) => {
            interaction
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new().content(usage.to_string()),
                )
                .await
                .ok();
            return;
        }
    };

    let page = match app_state.lookup(&parsed.player_name, parsed.page).await {
        Ok(page) => page,
        Err(e) => {
            error!(target = "pokedex.command", player = %parsed.player_name, error = %e, "lookup failed");
            interaction
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new().content(LOOKUP_FAILED),
                )
                .await
                .ok();
            return;
        }
    };

    let builder = EditInteractionResponse::new()
        .embed(create_pokedex_embed(&page))
        .components(vec![create_nav_row()]);
    let sent = match interaction.edit_response(&ctx.http, builder).await {
        Ok(sent) => sent,
        Err(e) => {
            error!(target = "pokedex.command", error = ?e, "failed to send pokedex page");
            return;
        }
    };
    track_session(ctx, &app_state, interaction.user.id, &sent, &page).await;
}
