//! `imgui-modgen generate` command (also the default)

use anyhow::Result;

use crate::cli::GenerateArgs;
use imgui_modgen::builder::{FileStatus, WrittenFile};
use imgui_modgen::ops::{generate, GenerateOptions, PassReport};
use imgui_modgen::Config;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let root = args.config.root;
    let config = Config::discover(&root, args.config.config.as_deref())?;

    let opts = GenerateOptions::new(&root)
        .with_output_dir(args.out)
        .with_dry_run(args.dry_run)
        .with_skip_backends(args.skip_backends);

    let report = generate(&config, &opts)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_pass("Core modules", &report.core, false);
    if let Some(ref backends) = report.backends {
        print_pass("Backend modules", backends, true);
    }

    if args.dry_run {
        println!("[dry-run] No files were written.");
    }

    Ok(())
}

fn print_pass(title: &str, pass: &PassReport, backends: bool) {
    let counts = &pass.counts;
    println!("{}: {} files", title, pass.files.len());
    if backends {
        println!("  {} types, {} functions", counts.types, counts.functions);
    } else {
        println!(
            "  {} enums, {} structs, {} type aliases, {} functions",
            counts.enums, counts.structs, counts.aliases, counts.functions
        );
    }
    for file in &pass.files {
        print_file(file);
    }
}

fn print_file(file: &WrittenFile) {
    let marker = match file.status {
        FileStatus::Created => "+",
        FileStatus::Updated => "~",
        FileStatus::Unchanged => "=",
        FileStatus::Skipped => "-",
    };
    println!("  {} {} ({})", marker, file.path.display(), file.status);
}
