//! Tokenizer for one pipeline stage.
//!
//! Single left-to-right scan with a Normal/Quoted mode so quoted runs keep
//! their blanks while the quote characters themselves are stripped.
use crate::error::{ParseError, ParseResult};
use crate::parse::trim::is_blank;
use crate::parse::{Command, MAX_COMMAND_ARGS};

#[derive(Copy, Clone, Eq, PartialEq)]
enum ParseMode {
    Normal,
    // Inside a quoted run; the field is the delimiter that closes it.
    Quoted(char),
}

/// Tokenize one trimmed, pipe-free segment into a command descriptor.
///
/// Quote rules: `'` and `"` open a verbatim run closed only by the same
/// character; the other quote character passes through literally; a quote
/// with no match runs to end of input; a quote in the middle of a word
/// splices its content into the surrounding token. There is no escape
/// processing.
pub(crate) fn build_command(segment: &str) -> ParseResult<Command> {
    let mut args: Vec<String> = Vec::new();
    args.try_reserve(1)
        .map_err(|_| ParseError::AllocationFailure)?;

    // Scratch for the current token; a de-quoted token never outgrows the
    // segment it came from.
    let mut buf = String::new();
    buf.try_reserve(segment.len())
        .map_err(|_| ParseError::AllocationFailure)?;

    let mut mode = ParseMode::Normal;
    let mut in_token = false;

    for ch in segment.chars() {
        match mode {
            ParseMode::Normal => {
                if is_blank(ch) {
                    if in_token {
                        push_arg(&mut args, &mut buf)?;
                        in_token = false;
                    }
                } else if ch == '\'' || ch == '"' {
                    // An empty quoted run is still a real (empty) argument.
                    in_token = true;
                    mode = ParseMode::Quoted(ch);
                } else {
                    in_token = true;
                    buf.push(ch);
                }
            }
            ParseMode::Quoted(delim) => {
                if ch == delim {
                    mode = ParseMode::Normal;
                } else {
                    buf.push(ch);
                }
            }
        }
    }

    // Unterminated quote: the run simply extends to end of segment.
    if in_token {
        push_arg(&mut args, &mut buf)?;
    }

    if args.is_empty() {
        return Err(ParseError::NoCommands);
    }

    Ok(Command::from_args(args))
}

// Copies the scratch into a right-sized argument string, so the scratch
// keeps its one-time reservation and every argument's backing storage is
// accounted for.
fn push_arg(args: &mut Vec<String>, buf: &mut String) -> ParseResult<()> {
    if args.len() == MAX_COMMAND_ARGS {
        return Err(ParseError::TooManyArguments);
    }
    args.try_reserve(1)
        .map_err(|_| ParseError::AllocationFailure)?;
    let mut arg = String::new();
    arg.try_reserve_exact(buf.len())
        .map_err(|_| ParseError::AllocationFailure)?;
    arg.push_str(buf);
    buf.clear();
    args.push(arg);
    Ok(())
}
