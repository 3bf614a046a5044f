use crate::interactions::ids::{POKEDEX_FAMILY, family};
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as SlashCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{debug, error, info};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Pokedex,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pokedex" | "dex" => Ok(Command::Pokedex),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Split a message into its command word and arguments, or `None` when it does not
/// start with `prefix`.
pub fn split_command<'a>(content: &'a str, prefix: &str) -> Option<(Command, Vec<&'a str>)> {
    let body = content.strip_prefix(prefix)?;
    let mut words = body.split_whitespace();
    let command = Command::from_str(words.next()?).unwrap_or(Command::Unknown);
    Some((command, words.collect()))
}

pub struct Handler {
    /// When set, messages and slash commands from other guilds are ignored.
    pub allowed_guild_id: Option<GuildId>,
}

impl Handler {
    fn guild_allowed(&self, guild_id: Option<GuildId>) -> bool {
        self.allowed_guild_id.is_none_or(|allowed| guild_id == Some(allowed))
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target = "handler", "AppState missing from TypeMap");
            return;
        };
        if let Interaction::Command(command) = &mut interaction {
            if !self.guild_allowed(command.guild_id) {
                return;
            }
            match command.data.name.as_str() {
                "pokedex" => commands::pokedex::run::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &mut interaction {
            let command_family = family(&component.data.custom_id);
            match command_family {
                POKEDEX_FAMILY => {
                    interactions::pokedex_handler::handle(&ctx, component, app_state).await
                }
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || !self.guild_allowed(msg.guild_id) {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let Some((command, args)) = split_command(&msg.content, &app_state.prefix) else {
            return;
        };
        debug!(target = "handler", author = msg.author.id.get(), content = %msg.content, "received command");
        match command {
            Command::Pokedex => commands::pokedex::run::run_prefix(&ctx, &msg, args).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target = "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![commands::pokedex::run::register()];
        let registered = match self.allowed_guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
            None => SlashCommand::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
        };
        match registered {
            Ok(()) => info!(target = "handler", "registered slash commands"),
            Err(e) => error!(target = "handler", error = ?e, "error registering slash commands"),
        }
    }
}
