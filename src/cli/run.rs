//! Command dispatch for the lokal CLI.

use anyhow::Result;

use super::args::{Arguments, Command};
use crate::commands::{
    CommandResult, export::export, import::import, init::init, key::key, locale::locale,
    pull::pull, push::push, set::set, status::status, translate::translate,
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Key(cmd)) => key(cmd),
        Some(Command::Set(cmd)) => set(cmd),
        Some(Command::Locale(cmd)) => locale(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Pull(cmd)) => pull(cmd),
        Some(Command::Push(cmd)) => push(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
