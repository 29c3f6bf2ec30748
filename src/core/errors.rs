//! Generation error types and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Failure while classifying or emitting a symbol.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ModgenError {
    #[error("symbol `{symbol}` not found in any header file")]
    #[diagnostic(
        code(modgen::resolve::symbol_not_found),
        help("Regenerate the cimgui metadata against the same headers")
    )]
    SymbolNotFound {
        symbol: String,
        searched: Vec<String>,
    },

    #[error("free function `{function}` has no recorded location")]
    #[diagnostic(code(modgen::functions::missing_location))]
    MissingLocation { function: String },

    #[error("cannot extract a type name from `{type_str}` (argument of `{function}`)")]
    #[diagnostic(
        code(modgen::backends::type_extraction),
        help("Only `[const] [struct] Name[*]` argument types are understood")
    )]
    TypeExtraction { function: String, type_str: String },

    #[error("input file not found: {}", path.display())]
    #[diagnostic(
        code(modgen::input::missing),
        help("Run from the directory containing `cimgui/`, or pass `--root <dir>`")
    )]
    MissingInput { path: PathBuf },

    #[error("no reference headers configured")]
    #[diagnostic(code(modgen::config::no_headers))]
    NoHeaders,
}

impl ModgenError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ModgenError::SymbolNotFound { symbol, searched } => {
                let mut diag = Diagnostic::error(format!(
                    "symbol `{}` not found in any header file",
                    symbol
                ));
                if !searched.is_empty() {
                    diag = diag.with_context(format!("searched: {}", searched.join(", ")));
                }
                diag.with_suggestion(suggestions::STALE_METADATA)
                    .with_suggestion(format!(
                        "If `{}` is defined in another header, add it to `[[headers]]`",
                        symbol
                    ))
            }

            ModgenError::MissingLocation { function } => {
                Diagnostic::error(format!("free function `{}` has no location", function))
                    .with_suggestion(suggestions::STALE_METADATA)
            }

            ModgenError::TypeExtraction { function, type_str } => Diagnostic::error(format!(
                "cannot extract a type name from `{}`",
                type_str
            ))
            .with_context(format!("argument of `{}`", function))
            .with_suggestion("Exclude the backend or wrap the type in a typedef"),

            ModgenError::MissingInput { path } => Diagnostic::error("input file not found")
                .with_location(path)
                .with_suggestion(suggestions::MISSING_INPUT)
                .with_suggestion(suggestions::PRINT_CONFIG),

            ModgenError::NoHeaders => Diagnostic::error("no reference headers configured")
                .with_suggestion(suggestions::PRINT_CONFIG),
        }
    }
}
