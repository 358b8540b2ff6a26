//! The interactive read-eval loop.
//!
//! Reads one line per iteration, runs the parser, and either dispatches a
//! builtin or prints the parsed pipeline. All user-visible wording for
//! parse failures lives here; the parser itself never prints.
use std::io;

use rustyline::history::DefaultHistory;
use rustyline::Editor;

use dsh::{parse_command_line, CommandList, ParseError, MAX_LINE_LEN};

use crate::builtins::{match_builtin, Builtin};
use crate::io_helpers::read_input_line;

pub const SH_PROMPT: &str = "dsh> ";

pub struct ShellState {
    pub editor: Editor<(), DefaultHistory>,
    pub interactive: bool,
}

pub enum LoopAction {
    Continue,
    Exit,
}

pub fn run_once(state: &mut ShellState) -> io::Result<LoopAction> {
    let line = match read_input_line(&mut state.editor, state.interactive, SH_PROMPT)? {
        Some(line) => line,
        None => {
            if state.interactive {
                println!();
            }
            return Ok(LoopAction::Exit);
        }
    };

    // Non-interactive reads keep the trailing newline.
    let line = line.trim_end_matches(['\n', '\r']);

    if line.len() > MAX_LINE_LEN {
        eprintln!("error: command line exceeds {MAX_LINE_LEN} bytes");
        return Ok(LoopAction::Continue);
    }

    let list = match parse_command_line(line) {
        Ok(list) => list,
        Err(ParseError::NoCommands) => {
            println!("warning: no commands provided");
            return Ok(LoopAction::Continue);
        }
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(LoopAction::Continue);
        }
    };
    trace_command_list(&list);

    if let Some(Builtin::Exit) = match_builtin(list.commands()[0].program()) {
        println!("exiting...");
        return Ok(LoopAction::Exit);
    }

    println!("PARSED COMMAND LINE - TOTAL COMMANDS {}", list.len());
    for (idx, cmd) in list.iter().enumerate() {
        println!("<{}> {}", idx + 1, cmd.display());
    }

    Ok(LoopAction::Continue)
}

fn trace_command_list(list: &CommandList) {
    for (idx, cmd) in list.iter().enumerate() {
        log::debug!("argv[{idx}]: {:?}", cmd.argv());
    }
}
