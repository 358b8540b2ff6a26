use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

mod builtins;
mod io_helpers;
mod repl;

use repl::{LoopAction, ShellState};

fn main() {
    init_logging();
    let interactive = io::stdin().is_terminal();

    let config = Config::builder().auto_add_history(true).build();
    let editor = match Editor::<(), DefaultHistory>::with_config(config) {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("error: {err}");
            return;
        }
    };

    let mut state = ShellState {
        editor,
        interactive,
    };
    let history_path = history_path();
    let _ = state.editor.load_history(&history_path);

    loop {
        match repl::run_once(&mut state) {
            Ok(LoopAction::Continue) => {}
            Ok(LoopAction::Exit) => break,
            Err(err) => eprintln!("error: {err}"),
        }
    }

    let _ = state.editor.save_history(&history_path);
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("DSH_LOG", "info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

fn history_path() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".dsh_history")
}
