//! Source transform and metadata hooks
//!
//! Hosts can customize compilation in two places without the shim knowing
//! the customization logic: a source transform (arbitrary source-to-source
//! rewrite) and a metadata provider (text prepended before the source,
//! e.g. a provenance or source-map comment). Both are injected explicitly
//! on the [`Compiler`](crate::compiler::Compiler) rather than looked up
//! from ambient global state.
//!
//! Unset hooks contribute identity / empty output. A panicking hook is not
//! isolated; the panic propagates to the caller.

use std::path::Path;

/// Source-to-source rewrite applied to the input before transpilation.
///
/// Receives the original source text and the input path.
pub type TransformFn = dyn Fn(&str, &Path) -> String + Send + Sync;

/// Produces text to prepend ahead of the (transformed) source.
///
/// Receives the input path.
pub type MetadataFn = dyn Fn(&Path) -> String + Send + Sync;

/// Optional hook slots, set once during compiler setup and read-only during
/// compilation.
#[derive(Default)]
pub struct Hooks {
    transform: Option<Box<TransformFn>>,
    metadata: Option<Box<MetadataFn>>,
}

impl Hooks {
    /// Create an empty hook set
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the source transform hook
    pub fn set_transform(&mut self, transform: impl Fn(&str, &Path) -> String + Send + Sync + 'static) {
        self.transform = Some(Box::new(transform));
    }

    /// Install the metadata hook
    pub fn set_metadata(&mut self, metadata: impl Fn(&Path) -> String + Send + Sync + 'static) {
        self.metadata = Some(Box::new(metadata));
    }

    /// Apply the transform hook, or return the source unchanged when unset
    pub fn apply_transform(&self, source: &str, path: &Path) -> String {
        match &self.transform {
            Some(transform) => transform(source, path),
            None => source.to_string(),
        }
    }

    /// Produce the metadata preamble, or an empty string when unset
    pub fn metadata_for(&self, path: &Path) -> String {
        match &self.metadata {
            Some(metadata) => metadata(path),
            None => String::new(),
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("transform", &self.transform.is_some())
            .field("metadata", &self.metadata.is_some())
            .finish()
    }
}
