//! Command-line grammar: the bounded edit buffer, the command table, the
//! parser that validates a committed line against it, and the dispatcher
//! that applies a parsed command to the session.
//!
//! # Grammar
//!
//! ```text
//! q                         quit
//! set_port <path>           remainder of the line, spaces preserved
//! set_baud <n>              signed integer, clamped to >= 0 on dispatch
//! set_format <d> <s> <p>    data bits, start bits, parity bit
//! ```

mod buffer;
mod dispatcher;
mod parser;
mod table;

pub use buffer::{InputBuffer, DEFAULT_CAPACITY};
pub use dispatcher::{dispatch, Flow};
pub use parser::{parse, STRING_ARG_LIMIT};
pub use table::{lookup, ArgType, Arity, CommandSpec, CommandTag, COMMANDS};

use thiserror::Error;

/// A user-visible command failure. Rendered verbatim in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The committed line held no tokens.
    #[error("PARSE ERROR")]
    Parse,
    /// Wrong argument count, type, length or range.
    #[error("INVALID ARGUMENT")]
    Argument,
    /// The first token names no known command.
    #[error("COMMAND NOT FOUND")]
    Unknown,
}

/// A validated command with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    SetPort(String),
    SetBaud(i64),
    SetFormat {
        data_bits: i64,
        start_bits: i64,
        parity: i64,
    },
}

/// Outcome of parsing one committed line.
pub type ParseResult = Result<Command, CommandError>;
