//! Tokenize a committed command line and validate it against the table.

use super::table::{lookup, ArgType, Arity, CommandTag};
use super::{Command, CommandError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Size of a string argument slot, including the terminator. String and
/// path arguments may hold at most `STRING_ARG_LIMIT - 1` bytes.
pub const STRING_ARG_LIMIT: usize = 64;

static NUMERIC_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("numeric argument pattern is valid"));

/// A validated argument before it is bound to its command variant.
#[derive(Debug)]
enum Arg {
    Text(String),
    Number(i64),
}

/// Parse one committed line.
///
/// The first whitespace-delimited token selects the command. Path commands
/// take the rest of the line as a single argument; every other command
/// takes whitespace-delimited tokens matched positionally against its
/// argument types. Errors never carry arguments.
pub fn parse(line: &str) -> ParseResult {
    let line = line.trim_start();
    let name = line.split_whitespace().next().ok_or(CommandError::Parse)?;
    let spec = lookup(name).ok_or(CommandError::Unknown)?;
    let rest = &line[name.len()..];

    let args = match spec.arity() {
        Arity::Remainder => vec![Arg::Text(parse_path(rest)?)],
        Arity::Exact(_) => parse_positional(spec.args, rest)?,
    };

    let command = bind(spec.tag, args)?;
    debug!(?command, "parsed command line");
    Ok(command)
}

/// The rest of the line after the command name, minus the separating
/// whitespace. Every separator character is dropped, not just the first, so
/// a path cannot start with a space. Embedded and trailing spaces are kept.
fn parse_path(rest: &str) -> Result<String, CommandError> {
    let path = rest.trim_start();
    if path.is_empty() || path.len() > STRING_ARG_LIMIT - 1 {
        return Err(CommandError::Argument);
    }
    Ok(path.to_string())
}

fn parse_positional(format: &[ArgType], rest: &str) -> Result<Vec<Arg>, CommandError> {
    let mut args = Vec::with_capacity(format.len());

    for (index, token) in rest.split_whitespace().enumerate() {
        // Too many arguments fails before the extra token is inspected.
        let Some(arg_type) = format.get(index) else {
            return Err(CommandError::Argument);
        };

        let arg = match arg_type {
            ArgType::Numeric => Arg::Number(parse_numeric(token)?),
            ArgType::String => {
                if token.is_empty() || token.len() > STRING_ARG_LIMIT - 1 {
                    return Err(CommandError::Argument);
                }
                Arg::Text(token.to_string())
            }
            // A path argument is only meaningful as the sole argument.
            ArgType::Path => return Err(CommandError::Argument),
        };
        args.push(arg);
    }

    if args.len() != format.len() {
        return Err(CommandError::Argument);
    }
    Ok(args)
}

fn parse_numeric(token: &str) -> Result<i64, CommandError> {
    if !NUMERIC_ARG.is_match(token) {
        return Err(CommandError::Argument);
    }
    token.parse().map_err(|_| CommandError::Argument)
}

fn bind(tag: CommandTag, args: Vec<Arg>) -> ParseResult {
    let mut args = args.into_iter();
    let command = match (tag, args.next(), args.next(), args.next()) {
        (CommandTag::Quit, None, None, None) => Command::Quit,
        (CommandTag::SetPort, Some(Arg::Text(path)), None, None) => Command::SetPort(path),
        (CommandTag::SetBaud, Some(Arg::Number(baud)), None, None) => Command::SetBaud(baud),
        (
            CommandTag::SetFormat,
            Some(Arg::Number(data_bits)),
            Some(Arg::Number(start_bits)),
            Some(Arg::Number(parity)),
        ) => Command::SetFormat {
            data_bits,
            start_bits,
            parity,
        },
        _ => return Err(CommandError::Argument),
    };
    Ok(command)
}
