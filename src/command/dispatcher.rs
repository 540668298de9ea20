//! Apply parsed commands to the session.

use super::{Command, CommandError, ParseResult};
use crate::state::{Framing, SessionState};
use tracing::{info, warn};

/// Whether the event loop keeps running after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one parse result to `state`.
///
/// Errors are recorded in `last_error` and never stop the loop. Successful
/// commands leave any previously displayed error in place; only Escape in
/// Normal mode clears it.
pub fn dispatch(result: ParseResult, state: &mut SessionState) -> Flow {
    let command = match result {
        Ok(command) => command,
        Err(err) => {
            warn!(error = %err, "command rejected");
            state.last_error = Some(err);
            return Flow::Continue;
        }
    };

    match command {
        Command::Quit => {
            info!("quit requested");
            return Flow::Quit;
        }
        Command::SetPort(port_name) => {
            info!(port = %port_name, "port set");
            state.port_name = port_name;
        }
        Command::SetBaud(baud) => match u64::try_from(baud) {
            Ok(baud) => {
                info!(baud, "baud set");
                state.baud = baud;
            }
            Err(_) => {
                warn!(baud, "negative baud clamped to 0");
                state.baud = 0;
                state.last_error = Some(CommandError::Argument);
            }
        },
        Command::SetFormat {
            data_bits,
            start_bits,
            parity,
        } => match framing(data_bits, start_bits, parity) {
            Some(framing) => {
                info!(?framing, "format set");
                state.framing = framing;
            }
            None => {
                warn!(data_bits, start_bits, parity, "format out of range");
                state.last_error = Some(CommandError::Argument);
            }
        },
    }
    Flow::Continue
}

fn framing(data_bits: i64, start_bits: i64, parity: i64) -> Option<Framing> {
    let data_bits = u8::try_from(data_bits).ok().filter(|b| (5..=8).contains(b))?;
    let start_bits = u8::try_from(start_bits).ok().filter(|b| (1..=2).contains(b))?;
    let parity_bit = match parity {
        0 => false,
        1 => true,
        _ => return None,
    };
    Some(Framing {
        data_bits,
        start_bits,
        parity_bit,
    })
}
