//! Error types for `filter` module

/// Failures while building a filter from configuration.
///
/// Matching itself never fails, so every variant here is a construction-time
/// error. Pattern compiler errors are passed through untouched so callers see
/// the engine's own message.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Neither metric names nor dimensions were given
    #[error("metric filter must have at least one metric or dimension defined on it")]
    NoCriteria,
    /// A dimension key was configured with an empty pattern list
    #[error("string map value in filter cannot be empty")]
    EmptyMapValue,
    /// A `/.../` token failed to compile
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// A glob token failed to compile
    #[error(transparent)]
    Glob(#[from] globset::Error),
    /// A configured dimension value was neither a string nor a list of strings
    #[error("{0} should be either a string or string list")]
    InvalidDimensionValue(String),
}
