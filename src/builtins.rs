//! Built-in command dispatch.
//!
//! Builtins are matched against the first argument of the first pipeline
//! stage after parsing; everything else is just displayed.

pub const EXIT_CMD: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
}

pub fn match_builtin(program: &str) -> Option<Builtin> {
    match program {
        EXIT_CMD => Some(Builtin::Exit),
        _ => None,
    }
}
