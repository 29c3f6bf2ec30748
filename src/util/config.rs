//! Configuration file support for imgui-modgen.
//!
//! Every path, naming convention, and hardcoded symbol list lives here so
//! that tracking a new Dear ImGui release is a `modgen.toml` edit, not a code
//! change. The defaults reproduce the layout of a cimgui checkout:
//!
//! ```toml
//! [paths]
//! output_dir = "generated"
//! backend_subdir = "backends"
//!
//! [[headers]]
//! location = "imgui"
//! path = "cimgui/imgui/imgui.h"
//!
//! [symbols]
//! nested_structs = ["ImGuiTextRange"]
//! ```
//!
//! Lookup order:
//! 1. `--config <file>` (errors are fatal)
//! 2. `modgen.toml` in the working root (parse errors fall back to defaults)
//! 3. Built-in defaults

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the project configuration file looked up in the working root.
pub const CONFIG_FILE_NAME: &str = "modgen.toml";

/// imgui-modgen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output paths
    pub paths: PathsConfig,

    /// Reference headers, in resolution priority order
    pub headers: Vec<HeaderConfig>,

    /// Generated module conventions
    pub module: ModuleConfig,

    /// Version-specific symbol lists
    pub symbols: SymbolsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: PathsConfig::default(),
            headers: default_headers(),
            module: ModuleConfig::default(),
            symbols: SymbolsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is absent or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Resolve the effective configuration for a working root.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default(&root.join(CONFIG_FILE_NAME))),
        }
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "failed to serialize config")
    }
}

/// Input descriptor and output locations, relative to the working root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Enum and struct table (`structs_and_enums.json`)
    pub structs_and_enums: PathBuf,

    /// Type alias table (`typedefs_dict.json`)
    pub typedefs: PathBuf,

    /// Function definitions (`definitions.json`)
    pub definitions: PathBuf,

    /// Backend function definitions (`impl_definitions.json`)
    pub impl_definitions: PathBuf,

    /// Directory receiving the core modules
    pub output_dir: PathBuf,

    /// Subdirectory of `output_dir` receiving the backend modules
    pub backend_subdir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let generator_output = Path::new("cimgui").join("generator").join("output");
        PathsConfig {
            structs_and_enums: generator_output.join("structs_and_enums.json"),
            typedefs: generator_output.join("typedefs_dict.json"),
            definitions: generator_output.join("definitions.json"),
            impl_definitions: generator_output.join("impl_definitions.json"),
            output_dir: PathBuf::from("generated"),
            backend_subdir: PathBuf::from("backends"),
        }
    }
}

/// A reference header used for substring location lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Location name assigned to symbols found in this header
    pub location: String,

    /// Header path, relative to the working root
    pub path: PathBuf,
}

impl HeaderConfig {
    fn new(location: &str, path: PathBuf) -> Self {
        HeaderConfig {
            location: location.to_string(),
            path,
        }
    }
}

/// Default reference headers: `imgui.h`, `imgui_internal.h`, `imgui_freetype.h`.
pub fn default_headers() -> Vec<HeaderConfig> {
    let imgui = Path::new("cimgui").join("imgui");
    vec![
        HeaderConfig::new("imgui", imgui.join("imgui.h")),
        HeaderConfig::new("imgui_internal", imgui.join("imgui_internal.h")),
        HeaderConfig::new(
            "imgui_freetype",
            imgui.join("misc").join("freetype").join("imgui_freetype.h"),
        ),
    ]
}

/// Conventions of the generated module sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Extension of the generated files
    pub extension: String,

    /// The root location every other module re-exports
    pub primary: String,

    /// C++ namespace of the library's free functions
    pub namespace: String,

    /// Name prefix of global (non-namespaced) helpers
    pub function_prefix: String,

    /// Macro guarding the math operator overloads
    pub math_operators_guard: String,

    /// Version check macro, which modules cannot export
    pub version_check_macro: String,

    /// Name of the function emitted in place of the version check macro
    pub version_check_function: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            extension: "cppm".to_string(),
            primary: "imgui".to_string(),
            namespace: "ImGui".to_string(),
            function_prefix: "Im".to_string(),
            math_operators_guard: "IMGUI_DEFINE_MATH_OPERATORS".to_string(),
            version_check_macro: "IMGUI_CHECKVERSION".to_string(),
            version_check_function: "CheckVersion".to_string(),
        }
    }
}

/// Symbol lists tied to a specific Dear ImGui release.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    /// Structs nested inside another struct, exported through their parent
    pub nested_structs: BTreeSet<String>,

    /// Functions in the library namespace despite carrying the helper prefix
    pub namespace_functions: BTreeSet<String>,

    /// Argument types never exported from backend modules
    pub primitive_types: BTreeSet<String>,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        SymbolsConfig {
            nested_structs: to_set(&["ImGuiTextRange"]),
            namespace_functions: to_set(&["ImageWithBg", "Image", "ImageButton", "ImageButtonEx"]),
            primitive_types: to_set(&[
                "bool",
                "int",
                "float",
                "double",
                "void",
                "char",
                "unsigned char",
                "short",
                "unsigned short",
                "long",
                "unsigned long",
                "long long",
                "unsigned long long",
                "size_t",
                "uint8_t",
                "uint16_t",
                "uint32_t",
                "uint64_t",
                "int8_t",
                "int16_t",
                "int32_t",
                "int64_t",
                "unsigned",
            ]),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
