//! Command-line parsing: one raw line in, an ordered pipeline of command
//! descriptors out.
//!
//! The pipeline splitter divides the line at `|` boundaries and the
//! tokenizer turns each stage into an argument vector with quote-aware
//! token boundaries. Capacity limits are enforced as reported errors,
//! never as silent truncation.
use crate::error::{ParseError, ParseResult};

/// Upper bound on a raw input line, in bytes. Enforced at the input
/// boundary by the read loop; the parser never truncates.
pub const MAX_LINE_LEN: usize = 1024;

/// Maximum arguments for a single command, program name included.
pub const MAX_COMMAND_ARGS: usize = 64;

/// Maximum commands in one pipeline.
pub const MAX_PIPELINE_COMMANDS: usize = 8;

mod pipeline;
mod tokenizer;
mod trim;

pub use pipeline::build_command_list;
pub use trim::trim_blanks;

pub(crate) use tokenizer::build_command;

/// One pipeline stage: program name plus arguments, in input order.
///
/// Only the tokenizer constructs these, so a `Command` reachable from the
/// outside always has at least one argument and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    pub(crate) fn from_args(args: Vec<String>) -> Self {
        debug_assert!(!args.is_empty());
        Self { args }
    }

    /// The program name (first argument).
    pub fn program(&self) -> &str {
        &self.args[0]
    }

    /// All arguments, program name first.
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Number of arguments, program name included.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// The sentinel-terminated argument form used at the exec boundary:
    /// every argument as `Some`, followed by exactly one `None`.
    pub fn argv_terminated(&self) -> impl Iterator<Item = Option<&str>> {
        self.args
            .iter()
            .map(|arg| Some(arg.as_str()))
            .chain(std::iter::once(None))
    }

    /// Render as `prog` or `prog [arg1 arg2 ...]`.
    pub fn display(&self) -> String {
        let mut out = self.args[0].clone();
        if self.args.len() > 1 {
            out.push_str(" [");
            out.push_str(&self.args[1..].join(" "));
            out.push(']');
        }
        out
    }
}

/// The parsed pipeline: one `Command` per stage, left to right.
///
/// A `CommandList` only exists for a fully parsed line; error paths drop
/// all partial state before returning, so callers never see (or need to
/// release) a half-built list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub(crate) fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Parse one raw command line into a pipeline of commands.
pub fn parse_command_line(input: &str) -> ParseResult<CommandList> {
    build_command_list(input)
}
