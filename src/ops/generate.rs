//! The full generation pipeline: core modules, then backend modules.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::builder::{GeneratedModule, ModuleOutputs, ModuleWriter, WrittenFile};
use crate::core::{DefinitionTable, LocationResolver, StructsAndEnums, TypedefTable};
use crate::ops::{aliases, backends, functions, structs};
use crate::util::config::Config;
use crate::util::fs;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory all configured paths are relative to
    pub root: PathBuf,

    /// Override for `paths.output_dir`
    pub output_dir: Option<PathBuf>,

    /// Compute everything but write nothing
    pub dry_run: bool,

    /// Skip the backend pass
    pub skip_backends: bool,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            root: root.into(),
            output_dir: None,
            dry_run: false,
            skip_backends: false,
        }
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_skip_backends(mut self, skip: bool) -> Self {
        self.skip_backends = skip;
        self
    }

    fn output_dir(&self, config: &Config) -> PathBuf {
        let dir = self
            .output_dir
            .as_deref()
            .unwrap_or(config.paths.output_dir.as_path());
        self.root.join(dir)
    }
}

/// Number of symbols exported by each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SymbolCounts {
    pub enums: usize,
    pub structs: usize,
    pub aliases: usize,
    pub functions: usize,
    pub types: usize,
}

/// Result of one pass.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub counts: SymbolCounts,
    pub files: Vec<WrittenFile>,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub core: PassReport,
    pub backends: Option<PassReport>,
}

impl GenerateReport {
    /// Every file touched by the run.
    pub fn files(&self) -> impl Iterator<Item = &WrittenFile> {
        self.core
            .files
            .iter()
            .chain(self.backends.iter().flat_map(|b| b.files.iter()))
    }
}

/// Build the core modules (enums, structs, aliases, functions).
pub fn generate_core(config: &Config, root: &Path) -> Result<(Vec<GeneratedModule>, SymbolCounts)> {
    let resolver = LocationResolver::load(root, &config.headers)?;
    let mut outputs = ModuleOutputs::new(&config.module);
    let mut counts = SymbolCounts::default();

    let path = root.join(&config.paths.structs_and_enums);
    let data: StructsAndEnums = fs::read_json(&path)?;
    counts.enums = structs::process_enums(&mut outputs, &data, &resolver)
        .with_context(|| format!("failed to process enums from {}", path.display()))?;
    counts.structs = structs::process_structs(&mut outputs, &data, &resolver, &config.symbols)
        .with_context(|| format!("failed to process structs from {}", path.display()))?;

    let path = root.join(&config.paths.typedefs);
    let typedefs: TypedefTable = fs::read_json(&path)?;
    counts.aliases = aliases::process_aliases(&mut outputs, &typedefs, &resolver)
        .with_context(|| format!("failed to process type aliases from {}", path.display()))?;

    let path = root.join(&config.paths.definitions);
    let definitions: DefinitionTable = fs::read_json(&path)?;
    counts.functions =
        functions::process_functions(&mut outputs, &definitions, &config.module, &config.symbols)
            .with_context(|| format!("failed to process functions from {}", path.display()))?;

    Ok((outputs.finish(), counts))
}

/// Build the backend modules from the backend function definitions.
pub fn generate_backends(
    config: &Config,
    root: &Path,
) -> Result<(Vec<GeneratedModule>, SymbolCounts)> {
    let mut outputs = ModuleOutputs::new(&config.module);

    let path = root.join(&config.paths.impl_definitions);
    let definitions: DefinitionTable = fs::read_json(&path)?;
    let backend = backends::process_backends(&mut outputs, &definitions, &config.symbols)
        .with_context(|| format!("failed to process backends from {}", path.display()))?;

    let counts = SymbolCounts {
        functions: backend.functions,
        types: backend.types,
        ..SymbolCounts::default()
    };
    Ok((outputs.finish(), counts))
}

/// Run both passes and write their modules.
///
/// Core modules are written before the backend pass starts.
pub fn generate(config: &Config, opts: &GenerateOptions) -> Result<GenerateReport> {
    let output_dir = opts.output_dir(config);
    let extension = config.module.extension.as_str();

    tracing::debug!("generating core modules from {}", opts.root.display());
    let (modules, counts) = generate_core(config, &opts.root)?;
    let files = ModuleWriter::new(&output_dir, extension)
        .with_dry_run(opts.dry_run)
        .write_all(&modules)?;
    let core = PassReport { counts, files };

    let backends = if opts.skip_backends {
        None
    } else {
        tracing::debug!("generating backend modules");
        let (modules, counts) = generate_backends(config, &opts.root)?;
        let files = ModuleWriter::new(output_dir.join(&config.paths.backend_subdir), extension)
            .with_dry_run(opts.dry_run)
            .write_all(&modules)?;
        Some(PassReport { counts, files })
    };

    Ok(GenerateReport { core, backends })
}
