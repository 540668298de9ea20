//! Static command table.

/// Type of a single positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// One whitespace-delimited token of 1 to `STRING_ARG_LIMIT - 1` bytes.
    String,
    /// One token matching `-?[0-9]+`.
    Numeric,
    /// The remainder of the line, embedded spaces included.
    Path,
}

/// How many arguments a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// A single path argument consuming the rest of the line.
    Remainder,
}

/// Identifies which command a table entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandTag {
    Quit,
    SetPort,
    SetBaud,
    SetFormat,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub args: &'static [ArgType],
    pub tag: CommandTag,
}

impl CommandSpec {
    pub fn arity(&self) -> Arity {
        match self.args {
            [ArgType::Path] => Arity::Remainder,
            args => Arity::Exact(args.len()),
        }
    }
}

/// All commands, in scan order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "q",
        args: &[],
        tag: CommandTag::Quit,
    },
    CommandSpec {
        name: "set_port",
        args: &[ArgType::Path],
        tag: CommandTag::SetPort,
    },
    CommandSpec {
        name: "set_baud",
        args: &[ArgType::Numeric],
        tag: CommandTag::SetBaud,
    },
    CommandSpec {
        name: "set_format",
        args: &[ArgType::Numeric, ArgType::Numeric, ArgType::Numeric],
        tag: CommandTag::SetFormat,
    },
];

/// Find a command by exact, case-sensitive name. First match wins.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known() {
        assert_eq!(lookup("q").map(|s| s.tag), Some(CommandTag::Quit));
        assert_eq!(lookup("set_port").map(|s| s.tag), Some(CommandTag::SetPort));
        assert_eq!(lookup("set_baud").map(|s| s.tag), Some(CommandTag::SetBaud));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("Q").is_none());
        assert!(lookup("SET_PORT").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_arity() {
        assert_eq!(lookup("q").map(CommandSpec::arity), Some(Arity::Exact(0)));
        assert_eq!(
            lookup("set_port").map(CommandSpec::arity),
            Some(Arity::Remainder)
        );
        assert_eq!(
            lookup("set_format").map(CommandSpec::arity),
            Some(Arity::Exact(3))
        );
    }

    #[test]
    fn test_names_do_not_overlap() {
        let names: HashSet<_> = COMMANDS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
