//! Command-line parsing for the dsh shell.
//!
//! This crate exposes a minimal API so fuzz targets and unit tests can link
//! only parsing logic without pulling in interactive deps.

mod error;
mod parse;

pub use error::{ParseError, ParseResult};
pub use parse::{
    Command, CommandList, MAX_COMMAND_ARGS, MAX_LINE_LEN, MAX_PIPELINE_COMMANDS,
};

/// Parse one line of input into a pipeline of command descriptors.
pub fn parse_command_line(input: &str) -> ParseResult<CommandList> {
    parse::parse_command_line(input)
}

/// Strip leading/trailing blanks from a line.
pub fn trim_blanks(input: &str) -> &str {
    parse::trim_blanks(input)
}

/// Fuzz helper for parser-only targets.
pub fn fuzz_parse_bytes(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    if let Ok(list) = parse_command_line(&input) {
        // Exercise the accessors the consumers rely on.
        for cmd in &list {
            let _ = cmd.program();
            let _ = cmd.display();
            let _ = cmd.argv_terminated().count();
        }
    }
}
