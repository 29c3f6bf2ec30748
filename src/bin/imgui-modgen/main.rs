//! imgui-modgen CLI - C++20 module wrappers for Dear ImGui

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use imgui_modgen::util::diagnostic;
use imgui_modgen::ModgenError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ModgenError>() {
            Some(err) => {
                let mut diag = err.to_diagnostic();
                let outer = e.to_string();
                if outer != err.to_string() {
                    diag = diag.with_context(outer);
                }
                diagnostic::emit(&diag, color);
            }
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("imgui_modgen=debug")
    } else {
        EnvFilter::new("imgui_modgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        None => commands::generate::execute(cli.generate),
        Some(Commands::Generate(args)) => commands::generate::execute(args),
        Some(Commands::PrintConfig(args)) => commands::print_config::execute(args),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
    }
}
