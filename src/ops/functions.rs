//! Free function exports from `definitions.json`.
//!
//! cimgui does not record whether a function lives in the `ImGui` namespace,
//! so the name decides: `Im`-prefixed helpers (`ImHashStr`, `ImFormatString`)
//! are global, everything else is `ImGui::`. A few `ImGui::` functions start
//! with `Im` anyway (`Image`, `ImageButton`) and are listed in
//! `symbols.namespace_functions`.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::builder::ModuleOutputs;
use crate::core::{DefinitionTable, Location, ModgenError};
use crate::util::config::{ModuleConfig, SymbolsConfig};

/// How a free function is re-exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionExport {
    /// `using ::Name;`
    Global,
    /// `using ImGui::Name;` inside a reopened namespace
    Namespaced,
}

/// Decide how a free function is exported.
pub fn classify_function(
    name: &str,
    module: &ModuleConfig,
    symbols: &SymbolsConfig,
) -> FunctionExport {
    if symbols.namespace_functions.contains(name) || !name.starts_with(&module.function_prefix) {
        FunctionExport::Namespaced
    } else {
        FunctionExport::Global
    }
}

#[derive(Default)]
struct FunctionBuckets<'a> {
    global: BTreeSet<&'a str>,
    namespaced: BTreeSet<&'a str>,
}

/// Export every free function; struct methods are skipped.
///
/// Returns the number of distinct functions exported.
pub fn process_functions(
    outputs: &mut ModuleOutputs,
    definitions: &DefinitionTable,
    module: &ModuleConfig,
    symbols: &SymbolsConfig,
) -> Result<usize> {
    let mut grouped: BTreeMap<Location, FunctionBuckets<'_>> = BTreeMap::new();

    for definition in definitions.definitions() {
        if definition.is_method() {
            continue;
        }

        let location = definition
            .location()
            .ok_or_else(|| ModgenError::MissingLocation {
                function: definition.funcname.clone(),
            })?;
        let name = definition.funcname.as_str();
        let buckets = grouped.entry(location).or_default();

        match classify_function(name, module, symbols) {
            FunctionExport::Global => buckets.global.insert(name),
            FunctionExport::Namespaced => buckets.namespaced.insert(name),
        };
    }

    let mut count = 0;
    for (location, buckets) in &grouped {
        let is_primary = outputs.is_primary(location);
        let buffer = outputs.buffer(location);
        buffer.push_str("\n    // ----- Functions -----\n\n");

        if !buckets.global.is_empty() {
            for name in &buckets.global {
                buffer.push_str(&format!("    using ::{};\n", name));
            }
            buffer.push('\n');
        }

        if !buckets.namespaced.is_empty() {
            buffer.push_str(&format!("namespace {} {{\n", module.namespace));
            for name in &buckets.namespaced {
                buffer.push_str(&format!("    using {}::{};\n", module.namespace, name));
            }
            if is_primary {
                buffer.push_str(&version_check_shim(module));
            }
            buffer.push_str("}\n");
        }

        count += buckets.global.len() + buckets.namespaced.len();
    }

    tracing::debug!("exported {} functions", count);
    Ok(count)
}

/// A function standing in for the version check macro, which a module cannot export.
fn version_check_shim(module: &ModuleConfig) -> String {
    format!(
        "\n    /**\n     * @brief Use this for the replacement of <tt>{macro_name}()</tt>.\n     */\n    void {function}() {{ {macro_name}(); }};\n",
        macro_name = module.version_check_macro,
        function = module.version_check_function,
    )
}
