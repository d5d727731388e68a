use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelflife", version, about = "Terminal tracker for perishable items")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a project store in the current directory
    Init,
    /// List items sorted by expiration date
    List,
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Expiration date in YYYY-MM-DD format
        date: String,
    },
    /// Remove an item
    Remove {
        /// Item id to remove
        id: String,
    },
    /// Edit an existing item
    Edit {
        /// Item id to edit
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New expiration date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Launch the interactive TUI
    Tui,
}
