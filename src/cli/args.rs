//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Terminal Pokédex: browse, search and inspect Pokémon from PokéAPI
#[derive(Parser, Debug)]
#[command(name = "rsdex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List Pokémon page by page
    List {
        /// Page size (default from config)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Starting position in the listing
        #[arg(short, long, default_value_t = 0)]
        offset: u32,

        /// Fetch full detail for every listed Pokémon
        #[arg(long)]
        details: bool,
    },

    /// Show one Pokémon: detail card plus evolution chain
    Show {
        /// Pokémon name or numeric id
        name_or_id: String,
    },

    /// Search by exact name (case-insensitive)
    Search {
        /// Name to look up
        query: String,
    },

    /// List all Pokémon types
    Types,

    /// List Pokémon of one type
    Type {
        /// Type name (e.g. fire)
        name: String,
    },

    /// Show the evolution chain of a species
    Evolution {
        /// Pokémon name or numeric id
        name_or_id: String,

        /// Render as a tree, preserving alternate branches
        #[arg(long)]
        tree: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config file path
    Path,
}
