//! Header locations and substring-based symbol classification.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::errors::ModgenError;
use crate::util::config::HeaderConfig;
use crate::util::fs;

/// The header group a symbol originates from, e.g. `imgui` or `imgui_internal`.
///
/// Each location becomes one generated module named after it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from a bare name.
    pub fn new(name: impl Into<String>) -> Self {
        Location(name.into())
    }

    /// Parse a descriptor location such as `imgui_internal:1234`.
    ///
    /// Everything from the first `:` on is dropped, as is a trailing `.h`.
    pub fn from_descriptor(raw: &str) -> Self {
        let name = raw.split(':').next().unwrap_or(raw);
        let name = name.strip_suffix(".h").unwrap_or(name);
        Location(name.to_string())
    }

    /// The location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The full text of one reference header.
#[derive(Debug, Clone)]
pub struct ReferenceHeader {
    pub location: Location,
    pub text: String,
}

impl ReferenceHeader {
    pub fn new(location: impl Into<String>, text: impl Into<String>) -> Self {
        ReferenceHeader {
            location: Location::new(location),
            text: text.into(),
        }
    }
}

/// Classifies symbols by searching reference header texts in priority order.
///
/// This is a plain substring test: a symbol that is a substring of a longer
/// identifier in a higher-priority header resolves to that header.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    headers: Vec<ReferenceHeader>,
}

impl LocationResolver {
    /// Create a resolver over headers given in priority order.
    pub fn new(headers: Vec<ReferenceHeader>) -> Self {
        LocationResolver { headers }
    }

    /// Read every configured header relative to `root`.
    pub fn load(root: &Path, headers: &[HeaderConfig]) -> Result<Self> {
        if headers.is_empty() {
            return Err(ModgenError::NoHeaders.into());
        }

        let mut loaded = Vec::with_capacity(headers.len());
        for header in headers {
            let path = root.join(&header.path);
            let text = fs::read_input(&path)?;
            tracing::debug!(
                "loaded {} ({} bytes) as `{}`",
                path.display(),
                text.len(),
                header.location
            );
            loaded.push(ReferenceHeader::new(header.location.clone(), text));
        }

        Ok(LocationResolver::new(loaded))
    }

    /// Find the first header containing `symbol`.
    pub fn resolve(&self, symbol: &str) -> Result<Location, ModgenError> {
        self.headers
            .iter()
            .find(|header| header.text.contains(symbol))
            .map(|header| header.location.clone())
            .ok_or_else(|| ModgenError::SymbolNotFound {
                symbol: symbol.to_string(),
                searched: self.locations().map(|l| l.to_string()).collect(),
            })
    }

    /// Locations in priority order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.headers.iter().map(|h| &h.location)
    }
}
