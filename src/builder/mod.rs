//! Module source construction and output.

pub mod module;
pub mod writer;

pub use module::{GeneratedModule, ModuleOutputs};
pub use writer::{FileStatus, ModuleWriter, WrittenFile};
