//! Compiler configuration
//!
//! One process-wide configuration value shared by the compile pipeline and
//! the project config writer. The fields are named and enumerated so that
//! call sites can override individual settings instead of maintaining
//! parallel copies of the whole configuration.
//!
//! Serialization uses TypeScript-compatible spelling (`"ESNext"`,
//! `experimentalDecorators`, ...) so the value can be embedded verbatim in
//! a `compilerOptions` block.

use serde::{Deserialize, Serialize};

/// Script target level for emitted code.
///
/// All supported targets are evergreen: the SWC backend performs no
/// downlevel emission, so the target is carried for descriptor output and
/// diagnostic labeling rather than behavior branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScriptTarget {
    /// ECMAScript 2020
    #[serde(rename = "ES2020")]
    Es2020,
    /// ECMAScript 2022
    #[serde(rename = "ES2022")]
    Es2022,
    /// Latest ECMAScript
    #[default]
    #[serde(rename = "ESNext")]
    EsNext,
}

/// Module emission format for import/export statements in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModuleFormat {
    /// Native ES modules
    #[default]
    #[serde(rename = "ESNext")]
    EsNext,
    /// CommonJS interop format
    #[serde(rename = "CommonJS")]
    CommonJs,
}

/// Fixed compiler configuration for single-file transpilation.
///
/// The default value is the configuration every compilation uses unless a
/// caller overrides it: evergreen target and module format, legacy-style
/// decorators enabled, and assignment-based class-field initialization
/// (`useDefineForClassFields: false`) to preserve the field-initialization
/// ordering downstream code expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Script target level
    pub target: ScriptTarget,
    /// Module emission format
    pub module: ModuleFormat,
    /// Legacy-style (pre-standards) decorator support
    pub experimental_decorators: bool,
    /// Define-based class-field initialization; `false` selects the legacy
    /// assignment semantics
    pub use_define_for_class_fields: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            target: ScriptTarget::EsNext,
            module: ModuleFormat::EsNext,
            experimental_decorators: true,
            use_define_for_class_fields: false,
        }
    }
}

impl CompilerOptions {
    /// Override the script target
    pub fn target(mut self, target: ScriptTarget) -> Self {
        self.target = target;
        self
    }

    /// Override the module emission format
    pub fn module(mut self, module: ModuleFormat) -> Self {
        self.module = module;
        self
    }

    /// Enable or disable legacy decorator support
    pub fn experimental_decorators(mut self, enabled: bool) -> Self {
        self.experimental_decorators = enabled;
        self
    }

    /// Select define-based (`true`) or assignment-based (`false`)
    /// class-field initialization
    pub fn use_define_for_class_fields(mut self, enabled: bool) -> Self {
        self.use_define_for_class_fields = enabled;
        self
    }
}
