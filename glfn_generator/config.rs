////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use crate::registry::Profile;

/// Naming and boilerplate choices for the generated C++ sources.
///
/// The defaults reproduce the ShaderTrap `GlFunctions` table for OpenGL ES.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Which `<feature api="...">` sections select the required commands.
    pub profile: Profile,
    /// C++ namespace wrapping both generated sources.
    pub namespace: String,
    /// Name of the generated struct of `std::function` fields.
    pub struct_name: String,
    /// Name of the generated function that fills the struct.
    pub loader_fn_name: String,
    /// Appended to every field name so fields never collide with GL macros of the same name.
    pub field_suffix: String,
    pub header_guard: String,
    /// Comment block placed at the very top of both sources.
    pub license: String,
    /// Includes and defines emitted before `#include <functional>` in the declaration.
    pub declaration_prelude: String,
    /// Targets of the `#include` lines of the initializer, quotes or brackets included.
    pub initializer_includes: Vec<String>,
    /// Treat required commands that the registry never defines as an error.
    pub strict: bool,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            profile: Profile::new("gles2"),
            namespace: "shadertrap".to_owned(),
            struct_name: "GlFunctions".to_owned(),
            loader_fn_name: "GetGlFunctions".to_owned(),
            field_suffix: "_".to_owned(),
            header_guard: "LIBSHADERTRAP_GL_FUNCTIONS_H".to_owned(),
            license: include_str!("generators/templates/license.txt").to_owned(),
            declaration_prelude: include_str!("generators/templates/gles_prelude.h").to_owned(),
            initializer_includes: vec!["<glad/glad.h>".to_owned(), "\"shadertrap/get_gl_functions.h\"".to_owned()],
            strict: false,
        }
    }
}

impl GeneratorConfig {
    pub fn with_profile<S: Into<String>>(mut self, profile: S) -> GeneratorConfig {
        self.profile = Profile::new(profile);
        self
    }

    pub fn strict(mut self, strict: bool) -> GeneratorConfig {
        self.strict = strict;
        self
    }

    /// Name of the struct field holding `command`.
    pub fn field_name(&self, command: &str) -> String {
        format!("{}{}", command, self.field_suffix)
    }
}
