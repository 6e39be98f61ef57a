//! Single-file compile pipeline
//!
//! One invocation is strictly sequential: read the input, derive the
//! metadata preamble, apply the source transform, concatenate (metadata
//! always precedes code, since downstream provenance tooling expects a
//! leading annotation block), transpile, write the output. There is no
//! caching, no retry, and no state shared between invocations beyond the
//! read-only configuration and hooks, so concurrent invocations on
//! disjoint path pairs are safe by construction.

use crate::diagnostics::{TspileError, TspileResult};
use crate::hooks::Hooks;
use crate::options::CompilerOptions;
use crate::transpiler::{SwcTranspiler, TranspileRequest, Transpiler};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Module name used when the caller does not supply one.
pub const DEFAULT_MODULE: &str = "root";

/// The transform shim: reads one file, applies hooks, transpiles, writes
/// the result.
///
/// # Example
///
/// ```no_run
/// use tspile::Compiler;
///
/// let compiler = Compiler::new()
///     .metadata(|path| format!("// compiled from {}\n", path.display()));
/// compiler.compile_file("src/app.ts", "dist/app.js").unwrap();
/// ```
#[derive(Debug)]
pub struct Compiler<T: Transpiler = SwcTranspiler> {
    options: CompilerOptions,
    hooks: Hooks,
    transpiler: T,
    strict_diagnostics: bool,
}

impl Compiler<SwcTranspiler> {
    /// Create a compiler with the SWC backend and the fixed default
    /// configuration
    pub fn new() -> Self {
        Self::with_transpiler(SwcTranspiler::new())
    }
}

impl Default for Compiler<SwcTranspiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transpiler> Compiler<T> {
    /// Create a compiler with a custom transpiler backend
    pub fn with_transpiler(transpiler: T) -> Self {
        Self {
            options: CompilerOptions::default(),
            hooks: Hooks::new(),
            transpiler,
            strict_diagnostics: false,
        }
    }

    /// Override the compiler configuration
    pub fn options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    /// Install the source transform hook
    pub fn transform(
        mut self,
        transform: impl Fn(&str, &Path) -> String + Send + Sync + 'static,
    ) -> Self {
        self.hooks.set_transform(transform);
        self
    }

    /// Install the metadata hook
    pub fn metadata(
        mut self,
        metadata: impl Fn(&Path) -> String + Send + Sync + 'static,
    ) -> Self {
        self.hooks.set_metadata(metadata);
        self
    }

    /// Fail compilation when the transpiler reports diagnostics instead of
    /// writing output anyway. Off by default: diagnostics are logged and
    /// the emitted text is written regardless.
    pub fn strict_diagnostics(mut self, strict: bool) -> Self {
        self.strict_diagnostics = strict;
        self
    }

    /// Compile `input` to `output` under the default module name.
    pub fn compile_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> TspileResult<()> {
        self.compile_file_as(input, output, DEFAULT_MODULE)
    }

    /// Compile `input` to `output` under an explicit logical module name.
    ///
    /// The input is read strictly before the output is touched: a read
    /// failure leaves any existing output file unmodified.
    pub fn compile_file_as(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        module_name: &str,
    ) -> TspileResult<()> {
        let input = input.as_ref();
        let output = output.as_ref();

        debug!(path = %input.display(), "compile.read");
        let source =
            fs::read_to_string(input).map_err(|e| TspileError::read(input, e))?;

        let preamble = self.hooks.metadata_for(input);
        let transformed = self.hooks.apply_transform(&source, input);
        let final_source = preamble + transformed.as_str();

        let text = self.compile_source(&name_for(input), final_source, module_name)?;

        debug!(path = %output.display(), len = text.len(), "compile.write");
        fs::write(output, &text).map_err(|e| TspileError::write(output, e))?;
        Ok(())
    }

    /// Transpile already-loaded source text without touching the
    /// filesystem. Hooks do not apply here; they belong to the file
    /// pipeline.
    pub fn compile_source(
        &self,
        name: &str,
        source: String,
        module_name: &str,
    ) -> TspileResult<String> {
        debug!(label = name, module = module_name, len = source.len(), "compile.transpile");
        let output = self.transpiler.transpile(TranspileRequest {
            name: name.to_string(),
            source,
            module_name: module_name.to_string(),
            options: self.options,
        })?;

        for diagnostic in &output.diagnostics {
            warn!(module = module_name, %diagnostic, "compile.diagnostic");
        }
        if self.strict_diagnostics && !output.diagnostics.is_empty() {
            return Err(TspileError::Diagnostics(output.diagnostics));
        }

        Ok(output.text)
    }
}

/// Diagnostic label for an input path: the extension after the last
/// period, falling back to `"ts"` for extensionless paths.
fn name_for(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("ts")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::TranspileOutput;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Test backend that brackets the source so concatenation order is
    /// visible in the output, and records every request it sees.
    #[derive(Default)]
    struct RecordingTranspiler {
        requests: Mutex<Vec<TranspileRequest>>,
        diagnostics: Vec<String>,
    }

    impl Transpiler for RecordingTranspiler {
        fn transpile(&self, request: TranspileRequest) -> TspileResult<TranspileOutput> {
            let text = format!("<<{}>>", request.source);
            self.requests.lock().unwrap().push(request);
            Ok(TranspileOutput {
                text,
                diagnostics: self.diagnostics.clone(),
            })
        }
    }

    fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_hooks_is_plain_transpile() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default());
        compiler.compile_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<<let x = 1;>>");
    }

    #[test]
    fn test_metadata_precedes_source() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default())
            .metadata(|_| "// meta\n".to_string());
        compiler.compile_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<<// meta\nlet x = 1;>>");
    }

    #[test]
    fn test_transform_applies_to_source_only() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        // If the transform ran over the concatenation, the preamble would
        // be uppercased too.
        let compiler = Compiler::with_transpiler(RecordingTranspiler::default())
            .metadata(|_| "// meta\n".to_string())
            .transform(|source, _| source.to_uppercase());
        compiler.compile_file(&input, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<<// meta\nLET X = 1;>>"
        );
    }

    #[test]
    fn test_module_name_defaults_to_root() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default());
        compiler.compile_file(&input, dir.path().join("app.js")).unwrap();
        compiler
            .compile_file_as(&input, dir.path().join("app2.js"), "widgets")
            .unwrap();

        let requests = compiler.transpiler.requests.lock().unwrap();
        assert_eq!(requests[0].module_name, "root");
        assert_eq!(requests[0].name, "ts");
        assert_eq!(requests[1].module_name, "widgets");
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("app.js");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default());
        let result = compiler.compile_file(dir.path().join("missing.ts"), &output);

        assert!(matches!(result, Err(TspileError::Read { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");
        fs::write(&output, "stale content").unwrap();

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default());
        compiler.compile_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<<let x = 1;>>");
    }

    #[test]
    fn test_idempotent_for_deterministic_hooks() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default())
            .metadata(|path| format!("// {}\n", path.display()));
        compiler.compile_file(&input, &output).unwrap();
        let first = fs::read(&output).unwrap();
        compiler.compile_file(&input, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_diagnostics_do_not_block_output_by_default() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        let transpiler = RecordingTranspiler {
            diagnostics: vec!["unexpected token".to_string()],
            ..Default::default()
        };
        let compiler = Compiler::with_transpiler(transpiler);
        compiler.compile_file(&input, &output).unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_strict_diagnostics_blocks_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "let x = 1;");
        let output = dir.path().join("app.js");

        let transpiler = RecordingTranspiler {
            diagnostics: vec!["unexpected token".to_string()],
            ..Default::default()
        };
        let compiler = Compiler::with_transpiler(transpiler).strict_diagnostics(true);
        let result = compiler.compile_file(&input, &output);

        assert!(matches!(result, Err(TspileError::Diagnostics(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_concurrent_invocations_on_disjoint_paths() {
        let dir = TempDir::new().unwrap();
        let input_a = write_input(&dir, "a.ts", "let a = 1;");
        let input_b = write_input(&dir, "b.ts", "let b = 2;");
        let output_a = dir.path().join("a.js");
        let output_b = dir.path().join("b.js");

        let compiler = Compiler::with_transpiler(RecordingTranspiler::default());
        std::thread::scope(|scope| {
            scope.spawn(|| compiler.compile_file(&input_a, &output_a).unwrap());
            scope.spawn(|| compiler.compile_file(&input_b, &output_b).unwrap());
        });

        assert_eq!(fs::read_to_string(&output_a).unwrap(), "<<let a = 1;>>");
        assert_eq!(fs::read_to_string(&output_b).unwrap(), "<<let b = 2;>>");
    }

    #[test]
    fn test_end_to_end_with_swc_backend() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "app.ts", "export const answer: number = 42;\n");
        let output = dir.path().join("app.js");

        Compiler::new()
            .metadata(|path| format!("// compiled from {}\n", path.display()))
            .compile_file(&input, &output)
            .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("answer"));
        assert!(!text.contains(": number"));
    }
}
