//! Transpiler seam and SWC backend
//!
//! The compile pipeline talks to its transpiler through the [`Transpiler`]
//! trait so hosts can substitute their own backend. The shipped backend is
//! [`SwcTranspiler`], built on deno_ast in single-file mode: like
//! `ts.transpileModule`, it cannot resolve modules, which is exactly the
//! contract this shim wants.

use crate::diagnostics::{TspileError, TspileResult};
use crate::options::{CompilerOptions, ModuleFormat};
use deno_ast::{
    EmitOptions, MediaType, ModuleKind, ModuleSpecifier, ParseParams, TranspileModuleOptions,
    TranspileOptions,
};

/// A single-file transpilation request.
#[derive(Debug, Clone)]
pub struct TranspileRequest {
    /// Diagnostic label, by convention the input path's extension after the
    /// last period (`"ts"`, `"tsx"`, ...). Selects the media type; it does
    /// not otherwise branch behavior.
    pub name: String,
    /// Full source text to transpile
    pub source: String,
    /// Logical module name, used only for diagnostic labeling
    pub module_name: String,
    /// Compiler configuration for this request
    pub options: CompilerOptions,
}

/// Output of a transpilation call.
#[derive(Debug, Clone)]
pub struct TranspileOutput {
    /// Emitted JavaScript text
    pub text: String,
    /// Rendered diagnostics reported during parsing. Non-empty output does
    /// not imply failure; policy is decided by the caller.
    pub diagnostics: Vec<String>,
}

/// Backend seam for single-file transpilation.
pub trait Transpiler {
    /// Transpile one source text under the request's configuration.
    fn transpile(&self, request: TranspileRequest) -> TspileResult<TranspileOutput>;
}

/// deno_ast (SWC) backed transpiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcTranspiler;

impl SwcTranspiler {
    /// Create the SWC backend
    pub fn new() -> Self {
        Self
    }
}

/// Map the request's `name` label to a media type. Unknown labels are
/// treated as TypeScript, the shim's primary input dialect.
fn media_type_for(name: &str) -> MediaType {
    match name {
        "ts" => MediaType::TypeScript,
        "mts" => MediaType::Mts,
        "cts" => MediaType::Cts,
        "tsx" => MediaType::Tsx,
        "jsx" => MediaType::Jsx,
        "js" => MediaType::JavaScript,
        "mjs" => MediaType::Mjs,
        "cjs" => MediaType::Cjs,
        _ => MediaType::TypeScript,
    }
}

impl Transpiler for SwcTranspiler {
    fn transpile(&self, request: TranspileRequest) -> TspileResult<TranspileOutput> {
        // Synthetic specifier; only surfaces in diagnostic messages.
        let specifier =
            ModuleSpecifier::parse(&format!("file:///{}.{}", request.module_name, request.name))
                .map_err(|e| TspileError::transpile(format!("invalid specifier: {e}")))?;
        let media_type = media_type_for(&request.name);

        let parsed = deno_ast::parse_module(ParseParams {
            specifier,
            text: request.source.into(),
            media_type,
            capture_tokens: false,
            scope_analysis: false,
            maybe_syntax: None,
        })
        .map_err(|e| TspileError::transpile(e.to_string()))?;

        let diagnostics: Vec<String> = parsed
            .diagnostics()
            .iter()
            .map(|d| d.to_string())
            .collect();

        let transpile_options = TranspileOptions {
            decorators: if request.options.experimental_decorators {
                deno_ast::DecoratorsTranspileOption::LegacyTypeScript {
                    emit_metadata: false,
                }
            } else {
                deno_ast::DecoratorsTranspileOption::None
            },
            ..Default::default()
        };
        let module_options = TranspileModuleOptions {
            module_kind: Some(match request.options.module {
                ModuleFormat::EsNext => ModuleKind::Esm,
                ModuleFormat::CommonJs => ModuleKind::Cjs,
            }),
        };

        let emitted = parsed
            .transpile(
                &transpile_options,
                &module_options,
                &EmitOptions::default(),
            )
            .map_err(|e| TspileError::transpile(e.to_string()))?;

        Ok(TranspileOutput {
            text: emitted.into_source().text,
            diagnostics,
        })
    }
}
