//! Pipeline splitting and command-list assembly.
use crate::error::{ParseError, ParseResult};
use crate::parse::{build_command, trim_blanks, Command, CommandList, MAX_PIPELINE_COMMANDS};

const PIPE_CHAR: char = '|';

/// Parse a full command line into a `CommandList`, one command per `|`
/// separated stage.
///
/// The stage-count limit is checked before any command is built, so a
/// too-long pipeline never allocates descriptors. Quoting does not protect
/// a pipe: the line is split on every `|` before the tokenizer runs.
pub fn build_command_list(line: &str) -> ParseResult<CommandList> {
    let line = trim_blanks(line);
    if line.is_empty() {
        return Err(ParseError::NoCommands);
    }

    let pipe_count = line.chars().filter(|ch| *ch == PIPE_CHAR).count();
    if pipe_count + 1 > MAX_PIPELINE_COMMANDS {
        return Err(ParseError::TooManyCommands);
    }

    let mut commands: Vec<Command> = Vec::new();
    commands
        .try_reserve_exact(pipe_count + 1)
        .map_err(|_| ParseError::AllocationFailure)?;

    // Empty fields from consecutive or boundary pipes are kept by split()
    // on purpose: "a||b" and "a|" are empty-command errors, not two-stage
    // pipelines. Returning early drops everything built so far.
    for segment in line.split(PIPE_CHAR) {
        let segment = trim_blanks(segment);
        if segment.is_empty() {
            return Err(ParseError::NoCommands);
        }
        commands.push(build_command(segment)?);
    }

    Ok(CommandList::from_commands(commands))
}
