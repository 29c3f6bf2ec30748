//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// imgui-modgen - Generate C++20 module wrappers for Dear ImGui from cimgui metadata
///
/// Run without a subcommand from the directory containing `cimgui/` to
/// generate every module with the default layout.
#[derive(Parser)]
#[command(name = "imgui-modgen")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate core and backend modules (the default)
    Generate(GenerateArgs),

    /// Print the effective configuration as TOML
    PrintConfig(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Clone)]
pub struct ConfigArgs {
    /// Directory the configured paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to `<root>/modgen.toml` when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (overrides `paths.output_dir`)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Report what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate the core modules
    #[arg(long)]
    pub skip_backends: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
