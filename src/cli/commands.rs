//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Personal diary with dated text and image entries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    Add {
        /// Day the entry is about (today, yesterday, 2024-03-05, 05-03-2024)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Entry text; opens the editor when omitted
        #[arg(short, long)]
        message: Option<String>,

        /// Image file (up to 5MB), image URL or data URI
        #[arg(short, long)]
        image: String,
    },

    /// Replace parts of an existing entry
    Edit {
        /// Entry id
        id: String,

        /// New day for the entry
        #[arg(short, long)]
        date: Option<String>,

        /// New entry text
        #[arg(short, long, conflicts_with = "editor")]
        message: Option<String>,

        /// Open the current text in the editor
        #[arg(short, long)]
        editor: bool,

        /// New image file, URL or data URI
        #[arg(short, long)]
        image: Option<String>,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// List entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search entries by text and/or day
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value = "")]
        text: String,

        /// Only entries on this day
        #[arg(long)]
        on: Option<String>,
    },

    /// Export all entries to a dated JSON file
    Export {
        /// Output directory (default: config export_dir, else current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete all entries
    Clear {
        /// Confirm deletion of every entry
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
