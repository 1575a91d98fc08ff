//! Treenav CLI - hierarchical navigation menu engine
//!
//! Usage: treenav <COMMAND>
//!
//! Commands:
//!   render  Render one menu as HTML for a request location
//!   check   Validate every menu in a menus file without rendering
//!   demo    Write a demonstration menus file and route table

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            menu,
            location,
            menus,
        } => commands::render::cmd_render(&menu, &location, menus, cli.json, cli.verbose),
        Commands::Check { menus } => commands::check::cmd_check(menus, cli.json),
        Commands::Demo { dir, force } => commands::demo::cmd_demo(&dir, force, cli.json),
    }
}
