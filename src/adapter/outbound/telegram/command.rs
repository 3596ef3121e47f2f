//! Telegram command parsing.

use crate::domain::TrackedTarget;

/// Longest accepted `network` or `address` value, in characters.
pub const MAX_ARGUMENT_CHARS: usize = 128;

/// Supported bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCommand {
    Start,
    Help,
    Track(TrackedTarget),
    Stop,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    /// `/command@name` addressed to a different bot.
    OtherBot(String),
    UnknownCommand(String),
    MissingArgument(&'static str),
    EmptyValue(&'static str),
    UnknownKey(String),
    DuplicateKey(&'static str),
    UnexpectedArgument(String),
    MixedArguments,
    TooLong(&'static str),
}

impl CommandParseError {
    /// True for errors in `/track` arguments (as opposed to the command itself).
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        !matches!(
            self,
            Self::NotACommand | Self::OtherBot(_) | Self::UnknownCommand(_)
        )
    }
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::OtherBot(name) => write!(f, "command is addressed to @{name}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
            Self::EmptyValue(name) => write!(f, "`{name}` must not be empty"),
            Self::UnknownKey(key) => write!(f, "unknown key `{key}` (use: network, address)"),
            Self::DuplicateKey(key) => write!(f, "`{key}` given more than once"),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument `{arg}`"),
            Self::MixedArguments => write!(
                f,
                "use either `network=<id> address=<addr>` or `<network> <address>`, not both"
            ),
            Self::TooLong(name) => {
                write!(f, "`{name}` is longer than {MAX_ARGUMENT_CHARS} characters")
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command, accepting any `@name` suffix.
pub fn parse_command(text: &str) -> Result<TrackerCommand, CommandParseError> {
    parse_command_for(text, None)
}

/// Parse a Telegram message addressed to the bot named `bot_username`.
///
/// `/command@name` where `name` differs from `bot_username` (case-insensitive)
/// is [`CommandParseError::OtherBot`]. With no username every suffix is accepted.
pub fn parse_command_for(
    text: &str,
    bot_username: Option<&str>,
) -> Result<TrackerCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = match raw_command.split_once('@') {
        Some((head, mention)) => {
            if let Some(own) = bot_username {
                if !mention.eq_ignore_ascii_case(own.trim_start_matches('@')) {
                    return Err(CommandParseError::OtherBot(mention.to_string()));
                }
            }
            head
        }
        None => raw_command,
    };

    match command {
        "/start" => Ok(TrackerCommand::Start),
        "/help" => Ok(TrackerCommand::Help),
        "/stop" => Ok(TrackerCommand::Stop),
        "/track" => parse_track_arguments(&parts.collect::<Vec<_>>()).map(TrackerCommand::Track),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Parse `/track` arguments in either `key=value` or positional form.
fn parse_track_arguments(args: &[&str]) -> Result<TrackedTarget, CommandParseError> {
    let keyed = args.iter().filter(|arg| arg.contains('=')).count();

    if keyed == 0 {
        return match args {
            [] => Err(CommandParseError::MissingArgument("network")),
            [_] => Err(CommandParseError::MissingArgument("address")),
            [network, address] => Ok(TrackedTarget::new(
                bounded("network", network)?,
                bounded("address", address)?,
            )),
            [_, _, extra, ..] => Err(CommandParseError::UnexpectedArgument((*extra).to_string())),
        };
    }
    if keyed != args.len() {
        return Err(CommandParseError::MixedArguments);
    }

    let mut network = None;
    let mut address = None;
    for arg in args {
        let Some((raw_key, value)) = arg.split_once('=') else {
            continue;
        };
        let (key, slot) = match raw_key.to_ascii_lowercase().as_str() {
            "network" => ("network", &mut network),
            "address" => ("address", &mut address),
            _ => return Err(CommandParseError::UnknownKey(raw_key.to_string())),
        };
        if value.is_empty() {
            return Err(CommandParseError::EmptyValue(key));
        }
        if slot.replace(value).is_some() {
            return Err(CommandParseError::DuplicateKey(key));
        }
    }

    let network = network.ok_or(CommandParseError::MissingArgument("network"))?;
    let address = address.ok_or(CommandParseError::MissingArgument("address"))?;
    Ok(TrackedTarget::new(
        bounded("network", network)?,
        bounded("address", address)?,
    ))
}

fn bounded<'a>(name: &'static str, value: &'a str) -> Result<&'a str, CommandParseError> {
    if value.chars().count() > MAX_ARGUMENT_CHARS {
        return Err(CommandParseError::TooLong(name));
    }
    Ok(value)
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "👋 Welcome to the token price tracker!\n\n\
    /track network=<network> address=<contract> - 📈 Track a token\n\
    /stop - 🛑 Stop tracking\n\
    /help - 📋 Show this message\n\n\
    Example: /track network=solana address=EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v\n\
    The short form /track <network> <contract> works too.\n\
    Each chat tracks one token; a new /track replaces the old one."
}

/// Usage text returned for malformed `/track` arguments.
#[must_use]
pub const fn track_usage() -> &'static str {
    "Usage: /track network=<network> address=<contract>\n\
    Example: /track network=eth address=0x6982508145454Ce325dDbE47a25d4ec3d2311933"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Start the bot"),
        ("track", "Track a token price"),
        ("stop", "Stop tracking"),
        ("help", "Show all commands"),
    ]
}
