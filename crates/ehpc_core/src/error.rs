use thiserror::Error;

/// Failure raised by the time/memory literal converters. Carries the raw
/// literal for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("invalid time format: {0}")]
    Time(String),
    #[error("invalid memory format: {0}")]
    Memory(String),
    #[error("invalid numeric value: {0}")]
    Count(String),
}

/// Failure taxonomy of a translation call. Either a complete descriptor is
/// produced or one of these is returned, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Script text was nil or blank; the caller must not build a descriptor.
    #[error("script content cannot be empty")]
    EmptyInput,

    /// Script contains only directives and comments, nothing to execute.
    #[error("script must contain executable commands")]
    EmptyScript,

    /// A directive value failed unit conversion. Tagged with the directive
    /// name; the raw literal travels in the source error.
    #[error("directive '{directive}' has an unparseable value")]
    Unit {
        directive: &'static str,
        #[source]
        source: UnitError,
    },
}

impl TranslateError {
    pub fn unit(directive: &'static str, source: UnitError) -> Self {
        Self::Unit { directive, source }
    }
}
