//! Project configuration descriptor
//!
//! Emits a JSON descriptor mapping logical module names to physical path
//! globs, for downstream tooling that needs to resolve the same modules
//! the host compiles. The descriptor embeds the compiler configuration so
//! tools and the shim agree on semantics.
//!
//! For each registered (name, base) pair the descriptor records
//! `compilerOptions.paths[name] = [base]` and appends `base + "*/*"` to
//! `includes`. Duplicate names replace the earlier entry; there is no
//! collision detection.

use crate::diagnostics::{TspileError, TspileResult};
use crate::options::CompilerOptions;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct DescriptorOptions<'a> {
    #[serde(flatten)]
    options: &'a CompilerOptions,
    paths: IndexMap<&'a str, [&'a str; 1]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Descriptor<'a> {
    compiler_options: DescriptorOptions<'a>,
    includes: Vec<String>,
}

/// Module path map plus the compiler configuration it was built against.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    options: CompilerOptions,
    modules: IndexMap<String, String>,
}

impl ProjectConfig {
    /// Create an empty project configuration with the default compiler
    /// configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the embedded compiler configuration
    pub fn options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a logical module name with its physical base path.
    ///
    /// Registering the same name twice keeps the later base path.
    pub fn add_module(&mut self, name: impl Into<String>, base_path: impl Into<String>) {
        self.modules.insert(name.into(), base_path.into());
    }

    /// Serialize the descriptor as 2-space-indented JSON
    pub fn to_json(&self) -> TspileResult<String> {
        let descriptor = Descriptor {
            compiler_options: DescriptorOptions {
                options: &self.options,
                paths: self
                    .modules
                    .iter()
                    .map(|(name, base)| (name.as_str(), [base.as_str()]))
                    .collect(),
            },
            includes: self
                .modules
                .values()
                .map(|base| format!("{base}*/*"))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&descriptor)?)
    }

    /// Write the descriptor to `path`, overwriting any existing file
    pub fn write(&self, path: impl AsRef<Path>) -> TspileResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        debug!(path = %path.display(), modules = self.modules.len(), "project.write");
        fs::write(path, json).map_err(|e| TspileError::write(path, e))
    }
}

/// One-shot convenience: build a descriptor from (name, base path) pairs
/// and write it to `path`.
pub fn write_config<I, K, V>(path: impl AsRef<Path>, files: I) -> TspileResult<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut config = ProjectConfig::new();
    for (name, base) in files {
        config.add_module(name, base);
    }
    config.write(path)
}
