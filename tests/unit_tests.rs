//! Behavioural tests for the console core
//!
//! Covers the command grammar, dispatch effects on the session and the
//! mode state machine, through the public API only.

mod common;

use common::{command_keys, feed};
use proptest::prelude::*;
use serial_sim::command::{dispatch, parse, Command, CommandError, Flow, STRING_ARG_LIMIT};
use serial_sim::controller::{Key, Mode, ModeController};
use serial_sim::state::SessionState;

// ============================================================================
// Parser
// ============================================================================

mod parser_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quit_parses_and_stops() {
        assert_eq!(parse("q"), Ok(Command::Quit));
        let mut state = SessionState::default();
        assert_eq!(dispatch(parse("q"), &mut state), Flow::Quit);
    }

    #[test]
    fn test_set_port() {
        assert_eq!(
            parse("set_port /dev/ttyUSB0"),
            Ok(Command::SetPort("/dev/ttyUSB0".to_string()))
        );
        let mut state = SessionState::default();
        dispatch(parse("set_port /dev/ttyUSB0"), &mut state);
        assert_eq!(state.port_name, "/dev/ttyUSB0");
    }

    #[test]
    fn test_set_baud() {
        assert_eq!(parse("set_baud 9600"), Ok(Command::SetBaud(9600)));
        let mut state = SessionState::default();
        dispatch(parse("set_baud 9600"), &mut state);
        assert_eq!(state.baud, 9600);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_negative_baud_parses_then_clamps() {
        assert_eq!(parse("set_baud -5"), Ok(Command::SetBaud(-5)));
        let mut state = SessionState::default();
        dispatch(parse("set_baud -5"), &mut state);
        assert_eq!(state.baud, 0);
        assert_eq!(state.last_error, Some(CommandError::Argument));
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(parse("set_baud abc"), Err(CommandError::Argument));
        assert_eq!(parse("bogus"), Err(CommandError::Unknown));
        assert_eq!(parse("set_port"), Err(CommandError::Argument));
        assert_eq!(parse(" \t "), Err(CommandError::Parse));
    }

    #[test]
    fn test_too_many_beats_type_error() {
        // The extra token is rejected even though it is also not numeric.
        assert_eq!(parse("set_baud 9600 abc"), Err(CommandError::Argument));
    }

    #[test]
    fn test_path_over_limit() {
        let path = "/dev/".to_string() + &"x".repeat(STRING_ARG_LIMIT);
        assert_eq!(
            parse(&format!("set_port {path}")),
            Err(CommandError::Argument)
        );
    }

    #[test]
    fn test_error_display_is_status_text() {
        assert_eq!(CommandError::Parse.to_string(), "PARSE ERROR");
        assert_eq!(CommandError::Argument.to_string(), "INVALID ARGUMENT");
        assert_eq!(CommandError::Unknown.to_string(), "COMMAND NOT FOUND");
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

mod dispatcher_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_successful_commands_are_idempotent() {
        for line in ["set_port COM3", "set_baud 19200", "set_format 7 1 1"] {
            let mut once = SessionState::default();
            dispatch(parse(line), &mut once);

            let mut twice = SessionState::default();
            dispatch(parse(line), &mut twice);
            dispatch(parse(line), &mut twice);

            assert_eq!(once, twice, "{line}");
        }
    }

    #[test]
    fn test_errors_change_only_last_error() {
        for (line, err) in [
            ("nope", CommandError::Unknown),
            ("set_baud x", CommandError::Argument),
            ("   ", CommandError::Parse),
        ] {
            let mut state = SessionState::default();
            assert_eq!(dispatch(parse(line), &mut state), Flow::Continue);
            assert_eq!(
                state,
                SessionState {
                    last_error: Some(err),
                    ..SessionState::default()
                }
            );
        }
    }
}

// ============================================================================
// Mode controller
// ============================================================================

mod controller_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_line_round_trip() {
        let mut controller = ModeController::default();
        let mut state = SessionState::default();
        feed(&mut controller, &mut state, &command_keys("set_port /dev/tty S0"));
        assert_eq!(controller.mode(), Mode::Normal);
        assert_eq!(state.port_name, "/dev/tty S0");
    }

    #[test]
    fn test_error_survives_until_escape() {
        let mut controller = ModeController::default();
        let mut state = SessionState::default();
        feed(&mut controller, &mut state, &command_keys("bogus"));
        assert_eq!(state.last_error, Some(CommandError::Unknown));

        feed(&mut controller, &mut state, &command_keys("set_baud 300"));
        assert_eq!(state.last_error, Some(CommandError::Unknown));

        controller.handle_key(Key::Escape, &mut state);
        assert_eq!(state.last_error, None);
        assert_eq!(state.baud, 300);
    }

    #[test]
    fn test_quit_command_through_keys() {
        let mut controller = ModeController::default();
        let mut state = SessionState::default();
        assert_eq!(
            feed(&mut controller, &mut state, &command_keys("q")),
            Flow::Quit
        );
    }

    #[test]
    fn test_backspace_on_empty_leaves_state() {
        let mut controller = ModeController::default();
        let mut state = SessionState::default();
        controller.handle_key(Key::Char(':'), &mut state);
        controller.handle_key(Key::Backspace, &mut state);
        assert_eq!(controller.mode(), Mode::Normal);
        assert_eq!(state, SessionState::default());
    }

    fn any_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            proptest::char::range(' ', '~').prop_map(Key::Char),
            Just(Key::Enter),
            Just(Key::Escape),
            Just(Key::Backspace),
            Just(Key::Resize),
            Just(Key::Other),
        ]
    }

    proptest! {
        #[test]
        fn prop_typed_keys_are_buffered_in_order(line in "[ -~]{0,63}") {
            let mut controller = ModeController::new(64);
            let mut state = SessionState::default();
            controller.handle_key(Key::Char(':'), &mut state);
            for c in line.chars() {
                controller.handle_key(Key::Char(c), &mut state);
            }
            prop_assert_eq!(controller.mode(), Mode::CommandLine);
            prop_assert_eq!(controller.buffer().as_str(), line.as_str());
        }

        #[test]
        fn prop_only_listed_keys_change_mode(keys in proptest::collection::vec(any_key(), 0..64)) {
            let mut controller = ModeController::new(16);
            let mut state = SessionState::default();
            for key in keys {
                let before = controller.mode();
                let was_empty = controller.buffer().is_empty();
                let flow = controller.handle_key(key, &mut state);
                if flow == Flow::Quit {
                    break;
                }
                let after = controller.mode();
                let expected = match (before, key) {
                    (Mode::Normal, Key::Char(':')) => Mode::CommandLine,
                    (Mode::Normal, _) => Mode::Normal,
                    (Mode::CommandLine, Key::Escape | Key::Enter) => Mode::Normal,
                    (Mode::CommandLine, Key::Backspace) if was_empty => Mode::Normal,
                    (Mode::CommandLine, _) => Mode::CommandLine,
                };
                prop_assert_eq!(after, expected);
                prop_assert!(controller.buffer().len() < 16);
            }
        }
    }
}
