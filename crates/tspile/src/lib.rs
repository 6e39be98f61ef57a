//! tspile: single-file TypeScript transpile shim
//!
//! A minimal source-to-source compilation step for embedding hosts:
//! - Reads one source file
//! - Optionally prepends host-generated metadata and applies a host
//!   source transform
//! - Transpiles the result in single-file mode (deno_ast/SWC, no module
//!   resolution) under a fixed compiler configuration
//! - Writes the emitted JavaScript to an output path
//!
//! There is no dependency graph, no watch mode, no caching, and no
//! orchestration across files; each invocation is one read, one
//! transpile, one write. A sibling writer emits a JSON project
//! descriptor mapping logical module names to physical path globs for
//! downstream tooling.
//!
//! # Usage
//!
//! ```no_run
//! use tspile::Compiler;
//!
//! let compiler = Compiler::new()
//!     .metadata(|path| format!("// compiled from {}\n", path.display()))
//!     .transform(|source, _path| source.replace("__HOST__", "runtime"));
//!
//! compiler.compile_file("src/app.ts", "dist/app.js").unwrap();
//! compiler.compile_file_as("src/widget.ts", "dist/widget.js", "widgets").unwrap();
//! ```

// Pipeline
pub mod compiler;
pub mod hooks;
pub mod transpiler;

// Configuration
pub mod options;
pub mod project;

// Errors
pub mod diagnostics;

// Re-exports for convenience
pub use compiler::{Compiler, DEFAULT_MODULE};
pub use diagnostics::{TspileError, TspileResult};
pub use options::{CompilerOptions, ModuleFormat, ScriptTarget};
pub use project::{write_config, ProjectConfig};
pub use transpiler::{SwcTranspiler, TranspileOutput, TranspileRequest, Transpiler};
