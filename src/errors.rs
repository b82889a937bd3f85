//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans into the offending WKT text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing WKT or editor input.
///
/// A blank coordinate slot is never one of these: it is a legitimate value,
/// not a syntax error.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed WKT: {expected}")]
    #[diagnostic(code(wktplot::parse::malformed))]
    Malformed {
        expected: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("expected a {expected} value, found {found}")]
    #[diagnostic(
        code(wktplot::parse::wrong_tag),
        help("the variant tag of a row is fixed; re-select the geometry type instead")
    )]
    WrongTag {
        expected: &'static str,
        found: String,
    },

    #[error("not a finite decimal number: {token:?}")]
    #[diagnostic(code(wktplot::parse::non_numeric))]
    NonNumeric { token: String },

    #[error("invalid color {value:?}, expected #RRGGBB")]
    #[diagnostic(code(wktplot::parse::invalid_color))]
    InvalidColor { value: String },
}

impl ParseError {
    /// Build a `Malformed` error from a pest error, clamping the reported
    /// span to the source text.
    pub(crate) fn from_pest<R: pest::RuleType>(src: &str, err: pest::error::Error<R>) -> Self {
        let (offset, len) = match err.location {
            pest::error::InputLocation::Pos(p) => (p, 1),
            pest::error::InputLocation::Span((s, e)) => (s, e.saturating_sub(s).max(1)),
        };
        let offset = offset.min(src.len());
        let len = len.min(src.len() - offset);
        ParseError::Malformed {
            expected: err.variant.message().into_owned(),
            src: NamedSource::new("<wkt>", src.to_string()),
            span: (offset, len).into(),
        }
    }
}

// ============================================================================
// Registry Errors
// ============================================================================

/// An unknown geometry tag was requested from the registry.
///
/// Callers must surface this rather than guess a default variant.
#[derive(Error, Diagnostic, Debug)]
#[error("unsupported geometry type: {name}")]
#[diagnostic(code(wktplot::registry::unsupported_variant))]
pub struct UnsupportedVariant {
    pub name: String,
}

// ============================================================================
// Sink Errors
// ============================================================================

/// A failure reported by a caller-supplied drawing backend.
///
/// The engine propagates these unchanged: rendering is best-effort-once per
/// row, and the caller decides whether to skip the row or abort the batch.
#[derive(Error, Debug)]
#[error("drawing backend failure: {0}")]
pub struct SinkError(pub Box<dyn std::error::Error + Send + Sync + 'static>);

impl SinkError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        SinkError(err.into())
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while rendering a row or a batch.
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Variant(#[from] UnsupportedVariant),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("style serialization failed")]
    #[diagnostic(code(wktplot::render::style))]
    Style(#[from] serde_json::Error),
}
