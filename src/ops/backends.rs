//! Backend module generation from `impl_definitions.json`.
//!
//! cimgui does not list the types declared by backend headers, so they are
//! inferred from the argument types of the backend functions.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::builder::ModuleOutputs;
use crate::core::{DefinitionTable, FunctionDefinition, Location, ModgenError};
use crate::util::config::SymbolsConfig;

static TYPE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:const\s+)?(?:struct\s+)?([a-zA-Z_][a-zA-Z0-9_]*)\*?")
        .expect("type identifier pattern is valid")
});

/// Extract the leading type identifier from an argument type.
///
/// Only the first word is taken, so `unsigned int` yields `unsigned`.
pub fn extract_type_name(type_str: &str) -> Option<&str> {
    TYPE_IDENTIFIER
        .captures(type_str)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Counts for one backend pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendCounts {
    pub types: usize,
    pub functions: usize,
}

#[derive(Default)]
struct BackendSymbols<'a> {
    types: BTreeSet<&'a str>,
    functions: BTreeSet<&'a str>,
}

fn location_of(definition: &FunctionDefinition) -> Result<Location, ModgenError> {
    definition
        .location()
        .ok_or_else(|| ModgenError::MissingLocation {
            function: definition.funcname.clone(),
        })
}

/// Export the referenced types and free functions of every backend.
pub fn process_backends(
    outputs: &mut ModuleOutputs,
    definitions: &DefinitionTable,
    symbols: &SymbolsConfig,
) -> Result<BackendCounts> {
    let mut grouped: BTreeMap<Location, BackendSymbols<'_>> = BTreeMap::new();

    for definition in definitions.definitions() {
        let entry = grouped.entry(location_of(definition)?).or_default();

        for argument in &definition.args {
            let type_name = extract_type_name(&argument.type_str).ok_or_else(|| {
                ModgenError::TypeExtraction {
                    function: definition.funcname.clone(),
                    type_str: argument.type_str.clone(),
                }
            })?;

            if !symbols.primitive_types.contains(type_name) {
                entry.types.insert(type_name);
            }
        }

        if !definition.is_method() {
            entry.functions.insert(&definition.funcname);
        }
    }

    let mut counts = BackendCounts::default();

    for (location, backend) in grouped.iter().filter(|(_, b)| !b.types.is_empty()) {
        let buffer = outputs.buffer(location);
        buffer.push_str("    // ----- Types -----\n\n");
        for name in &backend.types {
            buffer.push_str(&format!("    using ::{};\n", name));
        }
        buffer.push('\n');
        counts.types += backend.types.len();
    }

    for (location, backend) in grouped.iter().filter(|(_, b)| !b.functions.is_empty()) {
        let buffer = outputs.buffer(location);
        buffer.push_str("    // ----- Functions -----\n\n");
        for name in &backend.functions {
            buffer.push_str(&format!("    using ::{};\n", name));
        }
        counts.functions += backend.functions.len();
    }

    tracing::debug!(
        "exported {} backend types and {} backend functions",
        counts.types,
        counts.functions
    );
    Ok(counts)
}
