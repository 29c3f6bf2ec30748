//! Test fixtures for imgui-modgen unit tests.
//!
//! [`CimguiFixture`] lays out a miniature cimgui checkout (headers plus
//! generator output) so the full pipeline can run against a temp directory.

use std::path::Path;

use anyhow::Result;

use crate::util::fs;

const IMGUI_H: &str = r#"
struct ImVec2;
struct ImGuiIO;
struct ImGuiTextFilter { struct ImGuiTextRange; };
template<typename T> struct ImVector;
typedef unsigned int ImGuiID;
typedef ImU64 ImTextureID;
enum ImGuiCond_ { ImGuiCond_None = 0, ImGuiCond_Always = 1 << 0 };
namespace ImGui { bool Begin(const char* name); void Image(ImTextureID id); }
"#;

const IMGUI_INTERNAL_H: &str = r#"
struct ImGuiContext;
template<typename T> struct ImChunkStream;
typedef int ImGuiLayoutType;
enum ImGuiItemFlags_ { ImGuiItemFlags_None = 0 };
IMGUI_API ImGuiID ImHashStr(const char* data);
namespace ImGui { ImGuiWindow* GetCurrentWindow(); }
"#;

const IMGUI_FREETYPE_H: &str = r#"
enum ImGuiFreeTypeBuilderFlags { ImGuiFreeTypeBuilderFlags_NoHinting = 1 << 0 };
"#;

const STRUCTS_AND_ENUMS: &str = r#"{
    "enums": {
        "ImGuiCond_": [{"name": "ImGuiCond_None", "value": 0}, {"name": "ImGuiCond_Always", "value": 1}],
        "ImGuiItemFlags_": [{"name": "ImGuiItemFlags_None", "value": 0}],
        "ImGuiFreeTypeBuilderFlags": [{"name": "ImGuiFreeTypeBuilderFlags_NoHinting", "value": 1}]
    },
    "locations": {
        "ImGuiCond_": "imgui:100",
        "ImGuiItemFlags_": "imgui_internal:200",
        "ImGuiFreeTypeBuilderFlags": "imgui_freetype:10",
        "ImVec2": "imgui:250",
        "ImGuiIO": "imgui:300",
        "ImGuiTextFilter": "imgui:400",
        "ImGuiTextRange": "imgui:410",
        "ImGuiContext": "imgui_internal:500"
    },
    "structs": {"ImVec2": [], "ImGuiIO": [], "ImGuiTextFilter": [], "ImGuiTextRange": [], "ImGuiContext": []},
    "templated_structs": {"ImVector": {"ImWchar": "ImVector_ImWchar"}, "ImChunkStream": {"ImGuiTableSettings": "ImChunkStream_ImGuiTableSettings"}}
}"#;

const TYPEDEFS: &str = r#"{
    "ImGuiID": "unsigned int",
    "ImGuiIO": "struct ImGuiIO",
    "ImTextureID": "ImU64",
    "ImGuiLayoutType": "int"
}"#;

const DEFINITIONS: &str = r#"{
    "igBegin": [{"funcname": "Begin", "stname": "", "location": "imgui:350", "argsT": []}],
    "igImage": [{"funcname": "Image", "stname": "", "location": "imgui:500", "argsT": []}],
    "ImGuiIO_AddKeyEvent": [{"funcname": "AddKeyEvent", "stname": "ImGuiIO", "location": "imgui:2000", "argsT": []}],
    "igImHashStr": [{"funcname": "ImHashStr", "stname": "", "location": "imgui_internal:350", "argsT": []}],
    "igGetCurrentWindow": [{"funcname": "GetCurrentWindow", "stname": "", "location": "imgui_internal:2900", "argsT": []}]
}"#;

const IMPL_DEFINITIONS: &str = r#"{
    "ImGui_ImplGlfw_InitForOpenGL": [{
        "funcname": "ImGui_ImplGlfw_InitForOpenGL", "stname": "", "location": "imgui_impl_glfw:30",
        "argsT": [{"name": "window", "type": "GLFWwindow*"}, {"name": "install_callbacks", "type": "bool"}]
    }],
    "ImGui_ImplGlfw_Shutdown": [{
        "funcname": "ImGui_ImplGlfw_Shutdown", "stname": "", "location": "imgui_impl_glfw:31", "argsT": []
    }],
    "ImGui_ImplOpenGL3_RenderDrawData": [{
        "funcname": "ImGui_ImplOpenGL3_RenderDrawData", "stname": "", "location": "imgui_impl_opengl3:20",
        "argsT": [{"name": "draw_data", "type": "ImDrawData*"}]
    }]
}"#;

/// A miniature cimgui checkout.
#[derive(Debug, Clone)]
pub struct CimguiFixture {
    pub imgui_h: String,
    pub imgui_internal_h: String,
    pub imgui_freetype_h: String,
    pub structs_and_enums: String,
    pub typedefs: String,
    pub definitions: String,
    pub impl_definitions: String,
}

impl CimguiFixture {
    /// Fixture covering every symbol class across all three headers and two backends.
    pub fn standard() -> Self {
        CimguiFixture {
            imgui_h: IMGUI_H.to_string(),
            imgui_internal_h: IMGUI_INTERNAL_H.to_string(),
            imgui_freetype_h: IMGUI_FREETYPE_H.to_string(),
            structs_and_enums: STRUCTS_AND_ENUMS.to_string(),
            typedefs: TYPEDEFS.to_string(),
            definitions: DEFINITIONS.to_string(),
            impl_definitions: IMPL_DEFINITIONS.to_string(),
        }
    }

    /// Write the fixture under `root` using the default configured paths.
    pub fn write_to(&self, root: &Path) -> Result<()> {
        let imgui = root.join("cimgui/imgui");
        let output = root.join("cimgui/generator/output");

        fs::write_string(&imgui.join("imgui.h"), &self.imgui_h)?;
        fs::write_string(&imgui.join("imgui_internal.h"), &self.imgui_internal_h)?;
        fs::write_string(
            &imgui.join("misc/freetype/imgui_freetype.h"),
            &self.imgui_freetype_h,
        )?;
        fs::write_string(&output.join("structs_and_enums.json"), &self.structs_and_enums)?;
        fs::write_string(&output.join("typedefs_dict.json"), &self.typedefs)?;
        fs::write_string(&output.join("definitions.json"), &self.definitions)?;
        fs::write_string(&output.join("impl_definitions.json"), &self.impl_definitions)?;
        Ok(())
    }
}
