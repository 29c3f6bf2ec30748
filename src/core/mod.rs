//! Core data types: locations, descriptors, and errors.

pub mod descriptor;
pub mod errors;
pub mod location;

pub use descriptor::{
    ArgumentInfo, DefinitionTable, EnumMember, FunctionDefinition, NameList, OrderedMap,
    StructsAndEnums, TypedefTable,
};
pub use errors::ModgenError;
pub use location::{Location, LocationResolver, ReferenceHeader};
