mod cli;
mod commands;
mod model;
mod storage;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.command.unwrap_or(cli::Command::Tui);
    match command {
        cli::Command::Init => commands::init(),
        cli::Command::List => commands::list(),
        cli::Command::Add { name, date } => commands::add(name, date),
        cli::Command::Remove { id } => commands::remove(id),
        cli::Command::Edit { id, name, date } => commands::edit(id, name, date),
        cli::Command::Tui => commands::tui(),
    }
}
