//! High-level operations.
//!
//! Each stage reads one descriptor and appends to a shared [`ModuleOutputs`].
//!
//! [`ModuleOutputs`]: crate::builder::ModuleOutputs

pub mod aliases;
pub mod backends;
pub mod functions;
pub mod generate;
pub mod structs;

pub use aliases::process_aliases;
pub use backends::{extract_type_name, process_backends, BackendCounts};
pub use functions::{classify_function, process_functions, FunctionExport};
pub use generate::{
    generate, generate_backends, generate_core, GenerateOptions, GenerateReport, PassReport,
    SymbolCounts,
};
pub use structs::{process_enums, process_structs};
