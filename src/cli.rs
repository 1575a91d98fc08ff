use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Treenav - hierarchical navigation menu engine
#[derive(Parser, Debug)]
#[command(name = "treenav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for machine consumers
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one menu as HTML for a request location
    Render {
        /// Slug of the menu to render
        menu: String,

        /// Current request location, e.g. /about/
        #[arg(short, long, default_value = "/")]
        location: String,

        /// Path to the menus file (overrides config)
        #[arg(short, long)]
        menus: Option<PathBuf>,
    },

    /// Validate every menu in a menus file without rendering
    Check {
        /// Path to the menus file (overrides config)
        #[arg(short, long)]
        menus: Option<PathBuf>,
    },

    /// Write a demonstration menus file and route table
    Demo {
        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}
