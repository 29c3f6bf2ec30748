//! Type alias exports from `typedefs_dict.json`.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::builder::ModuleOutputs;
use crate::core::{Location, LocationResolver, TypedefTable};

/// Whether `original` is just `struct <alias>`, already exported as a struct.
pub fn is_struct_typedef(alias: &str, original: &str) -> bool {
    original
        .strip_prefix("struct ")
        .is_some_and(|name| name == alias)
}

/// Export every alias that is not a plain struct typedef.
///
/// Returns the number of aliases exported.
pub fn process_aliases(
    outputs: &mut ModuleOutputs,
    typedefs: &TypedefTable,
    resolver: &LocationResolver,
) -> Result<usize> {
    let mut grouped: BTreeMap<Location, Vec<&str>> = BTreeMap::new();

    for (alias, original) in typedefs.iter() {
        if is_struct_typedef(alias, original) {
            continue;
        }
        grouped
            .entry(resolver.resolve(alias)?)
            .or_default()
            .push(alias);
    }

    let mut count = 0;
    for (location, aliases) in &grouped {
        let buffer = outputs.buffer(location);
        buffer.push_str("\n    // ----- Type aliases -----\n\n");
        for alias in aliases {
            buffer.push_str(&format!("    using ::{};\n", alias));
        }
        count += aliases.len();
    }

    tracing::debug!("exported {} type aliases", count);
    Ok(count)
}
