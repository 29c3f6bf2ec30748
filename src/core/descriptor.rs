//! Descriptor records produced by the cimgui generator.
//!
//! These mirror the subset of `structs_and_enums.json`, `typedefs_dict.json`,
//! `definitions.json`, and `impl_definitions.json` that module generation
//! reads. Unknown fields are ignored.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::core::location::Location;

/// A JSON object whose key order is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// A list of names given either as an array or as the keys of an object.
///
/// cimgui writes `structs` as `{name: [fields...]}`; only the names matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameList(pub Vec<String>);

impl NameList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for NameList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameListVisitor;

        impl<'de> Visitor<'de> for NameListVisitor {
            type Value = NameList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of names or an object keyed by name")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(NameList(names))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut names = Vec::new();
                while let Some((name, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
                    names.push(name);
                }
                Ok(NameList(names))
            }
        }

        deserializer.deserialize_any(NameListVisitor)
    }
}

/// One enumerator of a flag group.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumMember {
    pub name: String,
}

/// Contents of `structs_and_enums.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StructsAndEnums {
    /// Symbol to `location:line`
    pub locations: HashMap<String, String>,

    /// Enum prefix (e.g. `ImGuiCond_`) to its members, in declaration order
    pub enums: OrderedMap<Vec<EnumMember>>,

    pub structs: NameList,

    /// Template instantiations such as `ImVector_ImWchar`, absent from `locations`
    pub templated_structs: NameList,
}

impl StructsAndEnums {
    /// The recorded location of `symbol`, if any.
    pub fn location_of(&self, symbol: &str) -> Option<Location> {
        self.locations
            .get(symbol)
            .map(|raw| Location::from_descriptor(raw))
    }
}

/// Contents of `typedefs_dict.json`: alias to original type, in file order.
pub type TypedefTable = OrderedMap<String>;

/// One argument of a function definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentInfo {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub type_str: String,
}

/// One entry of `definitions.json` or `impl_definitions.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub location: Option<String>,

    /// Owning struct; empty for free functions
    #[serde(default)]
    pub stname: String,

    pub funcname: String,

    #[serde(default, rename = "argsT")]
    pub args: Vec<ArgumentInfo>,
}

impl FunctionDefinition {
    /// Whether this definition is a struct method.
    pub fn is_method(&self) -> bool {
        !self.stname.is_empty()
    }

    /// The definition's location, if recorded.
    pub fn location(&self) -> Option<Location> {
        self.location.as_deref().map(Location::from_descriptor)
    }
}

/// Function definitions grouped by overload set (`cimname`).
///
/// Group order is irrelevant: every consumer deduplicates into sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DefinitionTable(pub BTreeMap<String, Vec<FunctionDefinition>>);

impl DefinitionTable {
    /// All definitions across all groups.
    pub fn definitions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.0.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structs_and_enums_keeps_enum_order() {
        let data: StructsAndEnums = serde_json::from_str(
            r#"{
                "enums": {
                    "ImGuiWindowFlags_": [{"name": "ImGuiWindowFlags_None", "value": 0}],
                    "ImGuiCond_": [{"name": "ImGuiCond_None"}, {"name": "ImGuiCond_Always"}]
                },
                "locations": {"ImGuiCond_": "imgui:123"},
                "structs": {"ImGuiIO": [], "ImDrawList": []},
                "templated_structs": {"ImVector": {"ImWchar": "ImVector_ImWchar"}}
            }"#,
        )
        .unwrap();

        let prefixes: Vec<_> = data.enums.iter().map(|(k, _)| k).collect();
        assert_eq!(prefixes, ["ImGuiWindowFlags_", "ImGuiCond_"]);
        assert_eq!(data.enums.0[1].1[1].name, "ImGuiCond_Always");
        assert_eq!(data.structs.0, ["ImGuiIO", "ImDrawList"]);
        assert_eq!(data.templated_structs.0, ["ImVector"]);
        assert_eq!(data.location_of("ImGuiCond_"), Some(Location::new("imgui")));
        assert_eq!(data.location_of("ImGuiIO"), None);
    }

    #[test]
    fn test_name_list_accepts_arrays() {
        let list: NameList = serde_json::from_str(r#"["ImVec2", "ImVec4"]"#).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), ["ImVec2", "ImVec4"]);
    }

    #[test]
    fn test_typedef_table_order() {
        let table: TypedefTable = serde_json::from_str(
            r#"{"ImTextureID": "ImU64", "ImGuiIO": "struct ImGuiIO", "ImDrawIdx": "unsigned short"}"#,
        )
        .unwrap();

        let aliases: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(aliases, ["ImTextureID", "ImGuiIO", "ImDrawIdx"]);
    }

    #[test]
    fn test_function_definition() {
        let table: DefinitionTable = serde_json::from_str(
            r#"{
                "igBegin": [{"funcname": "Begin", "stname": "", "location": "imgui:350",
                             "argsT": [{"name": "name", "type": "const char*"}]}],
                "ImDrawList_Clear": [{"funcname": "_ClearFreeMemory", "stname": "ImDrawList"}]
            }"#,
        )
        .unwrap();

        let defs: Vec<_> = table.definitions().collect();
        assert_eq!(defs.len(), 2);

        let begin = defs.iter().find(|d| d.funcname == "Begin").unwrap();
        assert!(!begin.is_method());
        assert_eq!(begin.location(), Some(Location::new("imgui")));
        assert_eq!(begin.args[0].type_str, "const char*");

        let clear = defs.iter().find(|d| d.stname == "ImDrawList").unwrap();
        assert!(clear.is_method());
        assert_eq!(clear.location(), None);
    }
}
