//! imgui-modgen - C++20 module wrappers for Dear ImGui
//!
//! Reads the JSON metadata produced by the cimgui generator and writes one
//! module interface unit per originating header, re-exporting every enum,
//! struct, type alias, and free function with `using` declarations. A second
//! pass does the same for the platform/renderer backends.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test fixtures for imgui-modgen unit tests.
///
/// Only available when compiling tests. Provides a miniature cimgui checkout
/// that the full pipeline can run against.
#[cfg(test)]
pub mod test_support;

pub use builder::{GeneratedModule, ModuleOutputs};
pub use core::{Location, LocationResolver, ModgenError};
pub use ops::{generate, GenerateOptions, GenerateReport};
pub use util::config::Config;
