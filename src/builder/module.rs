//! Per-location module text accumulation.

use std::collections::BTreeMap;

use crate::core::location::Location;
use crate::util::config::ModuleConfig;

/// Operators cimgui does not describe, re-exported by hand from the primary module.
const MATH_OPERATORS: &[&str] = &["+", "-", "*", "/", "+=", "-=", "*=", "/=", "==", "!="];

/// A finished module source, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub location: Location,
    pub contents: String,
}

/// Maps each location to its module source under construction.
///
/// A buffer is created with the module preamble the first time its location
/// is touched, and only ever appended to until [`ModuleOutputs::finish`].
#[derive(Debug, Clone)]
pub struct ModuleOutputs {
    conventions: ModuleConfig,
    buffers: BTreeMap<Location, String>,
}

impl ModuleOutputs {
    pub fn new(conventions: &ModuleConfig) -> Self {
        ModuleOutputs {
            conventions: conventions.clone(),
            buffers: BTreeMap::new(),
        }
    }

    /// Whether `location` is the root module every other module re-exports.
    pub fn is_primary(&self, location: &Location) -> bool {
        location.as_str() == self.conventions.primary
    }

    /// Get the buffer for `location`, creating it with the preamble if needed.
    pub fn buffer(&mut self, location: &Location) -> &mut String {
        let conventions = &self.conventions;
        self.buffers.entry(location.clone()).or_insert_with(|| {
            tracing::debug!("starting module `{}`", location);
            preamble(conventions, location)
        })
    }

    /// Append text to the buffer for `location`.
    pub fn append(&mut self, location: &Location, text: &str) {
        self.buffer(location).push_str(text);
    }

    /// Close every export scope and hand out the finished sources.
    pub fn finish(self) -> Vec<GeneratedModule> {
        self.buffers
            .into_iter()
            .map(|(location, mut contents)| {
                contents.push_str("}\n");
                GeneratedModule { location, contents }
            })
            .collect()
    }
}

fn preamble(conventions: &ModuleConfig, location: &Location) -> String {
    let mut text = format!("module;\n\n#include <{location}.h>\n\nexport module {location};\n\n");

    if location.as_str() == conventions.primary {
        text.push_str("export {\n");
        text.push_str(&format!("#ifdef {}\n", conventions.math_operators_guard));
        for op in MATH_OPERATORS {
            text.push_str(&format!("    using ::operator{};\n", op));
        }
        text.push_str("#endif\n\n");
    } else {
        text.push_str(&format!(
            "export import {};\n\nexport {{\n",
            conventions.primary
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs() -> ModuleOutputs {
        ModuleOutputs::new(&ModuleConfig::default())
    }

    #[test]
    fn test_primary_preamble() {
        let mut outputs = outputs();
        let imgui = Location::new("imgui");
        outputs.append(&imgui, "    using ::ImVec2;\n");

        let modules = outputs.finish();
        assert_eq!(modules.len(), 1);
        assert_eq!(
            modules[0].contents,
            "module;\n\n#include <imgui.h>\n\nexport module imgui;\n\n\
             export {\n#ifdef IMGUI_DEFINE_MATH_OPERATORS\n\
             \x20   using ::operator+;\n    using ::operator-;\n    using ::operator*;\n\
             \x20   using ::operator/;\n    using ::operator+=;\n    using ::operator-=;\n\
             \x20   using ::operator*=;\n    using ::operator/=;\n    using ::operator==;\n\
             \x20   using ::operator!=;\n#endif\n\n    using ::ImVec2;\n}\n"
        );
    }

    #[test]
    fn test_secondary_preamble_reexports_primary() {
        let mut outputs = outputs();
        outputs.buffer(&Location::new("imgui_internal"));

        let modules = outputs.finish();
        assert_eq!(
            modules[0].contents,
            "module;\n\n#include <imgui_internal.h>\n\nexport module imgui_internal;\n\n\
             export import imgui;\n\nexport {\n}\n"
        );
    }

    #[test]
    fn test_preamble_written_once() {
        let mut outputs = outputs();
        let internal = Location::new("imgui_internal");
        outputs.append(&internal, "a");
        outputs.append(&internal, "b");

        let modules = outputs.finish();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].contents.matches("export module").count(), 1);
        assert!(modules[0].contents.ends_with("export {\nab}\n"));
    }

    #[test]
    fn test_is_primary_follows_config() {
        let conventions = ModuleConfig {
            primary: "imgui_core".to_string(),
            ..ModuleConfig::default()
        };
        let outputs = ModuleOutputs::new(&conventions);
        assert!(outputs.is_primary(&Location::new("imgui_core")));
        assert!(!outputs.is_primary(&Location::new("imgui")));
    }
}
