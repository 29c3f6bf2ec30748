//! Enum and struct exports from `structs_and_enums.json`.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::builder::ModuleOutputs;
use crate::core::{Location, LocationResolver, StructsAndEnums};
use crate::util::config::SymbolsConfig;

/// Location of a symbol from the descriptor index, else from the headers.
fn locate(
    data: &StructsAndEnums,
    resolver: &LocationResolver,
    symbol: &str,
) -> Result<Location> {
    match data.location_of(symbol) {
        Some(location) => Ok(location),
        None => Ok(resolver.resolve(symbol)?),
    }
}

/// Export every enum prefix followed by its members, grouped per location.
///
/// Returns the number of enum groups exported.
pub fn process_enums(
    outputs: &mut ModuleOutputs,
    data: &StructsAndEnums,
    resolver: &LocationResolver,
) -> Result<usize> {
    let mut grouped: BTreeMap<Location, Vec<(&str, Vec<&str>)>> = BTreeMap::new();

    for (prefix, members) in data.enums.iter() {
        let location = locate(data, resolver, prefix)?;
        let flags = members.iter().map(|m| m.name.as_str()).collect();
        grouped.entry(location).or_default().push((prefix, flags));
    }

    let mut count = 0;
    for (location, enums) in &grouped {
        let buffer = outputs.buffer(location);
        buffer.push_str("    // ----- Enums -----\n");
        for (prefix, flags) in enums {
            buffer.push_str(&format!("\n    using ::{};\n", prefix));
            for flag in flags {
                buffer.push_str(&format!("    using ::{};\n", flag));
            }
        }
        count += enums.len();
    }

    tracing::debug!("exported {} enums", count);
    Ok(count)
}

/// Export plain and templated structs, skipping nested ones.
///
/// Returns the number of structs exported.
pub fn process_structs(
    outputs: &mut ModuleOutputs,
    data: &StructsAndEnums,
    resolver: &LocationResolver,
    symbols: &SymbolsConfig,
) -> Result<usize> {
    let mut grouped: BTreeMap<Location, BTreeSet<&str>> = BTreeMap::new();

    for name in data.structs.iter().chain(data.templated_structs.iter()) {
        if symbols.nested_structs.contains(name) {
            tracing::debug!("skipping nested struct `{}`", name);
            continue;
        }

        let location = locate(data, resolver, name)?;
        grouped.entry(location).or_default().insert(name);
    }

    let mut count = 0;
    for (location, structs) in &grouped {
        let buffer = outputs.buffer(location);
        buffer.push_str("\n    // ----- Structs -----\n\n");
        for name in structs {
            buffer.push_str(&format!("    using ::{};\n", name));
        }
        count += structs.len();
    }

    tracing::debug!("exported {} structs", count);
    Ok(count)
}
