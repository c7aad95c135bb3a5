//! texforge CLI - Command-line interface for procedural texture generation
//!
//! This binary validates texture specs, generates PNG files from specs or
//! inline controls, and previews textures in the terminal.

use clap::Parser;
use std::process::ExitCode;

use texforge_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            controls,
            out_root,
            output,
            compression,
            json,
        } => commands::generate::run(
            spec.as_deref(),
            &controls,
            out_root.as_deref(),
            output.as_deref(),
            &compression,
            json,
        ),
        Commands::Preview {
            spec,
            controls,
            max_width,
        } => commands::preview::run(spec.as_deref(), &controls, max_width),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Template { mode, name, out } => {
            commands::template::run(&mode, name.as_deref(), out.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
