//! Command text parsing, component id routing and startup configuration.
use pokedex_bot::commands::pokedex::run::{PokedexArgs, parse_args};
use pokedex_bot::commands::pokedex::state::Direction;
use pokedex_bot::config::Config;
use pokedex_bot::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PREFIX, DEFAULT_SAVE_DIR};
use pokedex_bot::error::{ConfigError, UsageError};
use pokedex_bot::handler::{Command, split_command};
use pokedex_bot::interactions::ids::{
    POKEDEX_FAMILY, POKEDEX_NEXT, POKEDEX_PREV, family, nav_direction,
};
use std::collections::HashMap;
use std::path::PathBuf;

#[test]
fn player_only_defaults_to_page_one() {
    assert_eq!(
        parse_args(&["Ash"]),
        Ok(PokedexArgs {
            player_name: "Ash".to_string(),
            page: 1
        })
    );
}

#[test]
fn explicit_page_is_used_and_extra_words_ignored() {
    let parsed = parse_args(&["Ash", "3", "please"]).unwrap();
    assert_eq!(parsed.page, 3);
    assert_eq!(parsed.player_name, "Ash");
}

#[test]
fn missing_player_is_a_usage_error() {
    assert_eq!(parse_args(&[]), Err(UsageError::MissingPlayer));
    assert_eq!(parse_args(&[""]), Err(UsageError::MissingPlayer));
    assert_eq!(
        UsageError::MissingPlayer.to_string(),
        "Please provide a player name."
    );
}

#[test]
fn bad_pages_are_usage_errors() {
    for bad in ["0", "-2", "two", "1.5"] {
        assert_eq!(
            parse_args(&["Ash", bad]),
            Err(UsageError::InvalidPage(bad.to_string())),
            "page `{bad}`"
        );
    }
}

#[test]
fn split_command_recognises_prefix_and_aliases() {
    let (cmd, args) = split_command("!pokedex Ash 2", "!").unwrap();
    assert_eq!(cmd, Command::Pokedex);
    assert_eq!(args, vec!["Ash", "2"]);

    let (cmd, args) = split_command("!dex   Misty", "!").unwrap();
    assert_eq!(cmd, Command::Pokedex);
    assert_eq!(args, vec!["Misty"]);

    let (cmd, args) = split_command("!pokedex", "!").unwrap();
    assert_eq!(cmd, Command::Pokedex);
    assert!(args.is_empty());

    assert_eq!(split_command("!ping", "!").unwrap().0, Command::Unknown);
    assert!(split_command("pokedex Ash", "!").is_none());
    assert!(split_command("!", "!").is_none());
}

#[test]
fn nav_ids_route_to_pokedex_family() {
    assert_eq!(family(POKEDEX_PREV), POKEDEX_FAMILY);
    assert_eq!(family(POKEDEX_NEXT), POKEDEX_FAMILY);
    assert_eq!(nav_direction(POKEDEX_PREV), Some(Direction::Previous));
    assert_eq!(nav_direction(POKEDEX_NEXT), Some(Direction::Next));
    assert_eq!(nav_direction("pokedex_other"), None);
    assert_eq!(family(""), "");
}

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn config_defaults_apply() {
    let config = Config::from_lookup(lookup_from(&[
        ("DISCORD_TOKEN", "token"),
        ("DATABASE_URL", "postgres://localhost/pokedex"),
    ]))
    .unwrap();
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.save_dir, PathBuf::from(DEFAULT_SAVE_DIR));
    assert_eq!(config.prefix, DEFAULT_PREFIX);
    assert!(config.allowed_guild_id.is_none());
    assert!(!format!("{config:?}").contains("token"));
}

#[test]
fn config_overrides_are_read() {
    let config = Config::from_lookup(lookup_from(&[
        ("DISCORD_TOKEN", "token"),
        ("DATABASE_URL", "postgres://localhost/pokedex"),
        ("POKEDEX_SAVE_DIR", "/srv/world/pokemon"),
        ("POKEDEX_PAGE_SIZE", "10"),
        ("SERVER_ID", "123456789"),
        ("COMMAND_PREFIX", "?"),
    ]))
    .unwrap();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.save_dir, PathBuf::from("/srv/world/pokemon"));
    assert_eq!(config.allowed_guild_id.map(|g| g.get()), Some(123456789));
    assert_eq!(config.prefix, "?");
}

#[test]
fn config_missing_credentials_fail() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DISCORD_TOKEN"));
    let err = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "t"), ("DATABASE_URL", "  ")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn config_malformed_values_fail() {
    let base = [("DISCORD_TOKEN", "t"), ("DATABASE_URL", "postgres://x")];
    for (key, value) in [
        ("POKEDEX_PAGE_SIZE", "0"),
        ("POKEDEX_PAGE_SIZE", "many"),
        ("SERVER_ID", "0"),
        ("SERVER_ID", "guild"),
        ("COMMAND_PREFIX", " "),
    ] {
        let mut pairs = base.to_vec();
        pairs.push((key, value));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { key: k, .. } if k == key),
            "{key}={value:?} gave {err:?}"
        );
    }
}
