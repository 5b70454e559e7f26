mod args;

pub use args::{AnimateArgs, ArrangeArgs, ArrangementKind, CliArgs, Command, InitArgs};
