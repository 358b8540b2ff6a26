//! Error types for command-line parsing.
//!
//! Parsing returns a discriminated `ParseError` instead of printing or
//! terminating; the read-eval loop decides how each condition is worded
//! for the user.

use std::fmt;

use crate::parse::{MAX_COMMAND_ARGS, MAX_PIPELINE_COMMANDS};

/// Conditions under which a command line fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or blank after trimming, or a pipeline segment was.
    NoCommands,
    /// More pipeline stages than `MAX_PIPELINE_COMMANDS`.
    TooManyCommands,
    /// A single stage produced more than `MAX_COMMAND_ARGS` arguments.
    TooManyArguments,
    /// Storage for a command or its argument text could not be allocated.
    AllocationFailure,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::NoCommands => write!(f, "no commands provided"),
            ParseError::TooManyCommands => {
                write!(f, "piping limited to {} commands", MAX_PIPELINE_COMMANDS)
            }
            ParseError::TooManyArguments => {
                write!(f, "commands limited to {} arguments", MAX_COMMAND_ARGS)
            }
            ParseError::AllocationFailure => {
                write!(f, "out of memory while building command list")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;
