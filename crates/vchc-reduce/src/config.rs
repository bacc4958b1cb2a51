use vchc_core::provenance::SchemaVersion;

/// Configuration options that control the behaviour of [`Reducer`](crate::Reducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionConfig {
    /// Prefix of the selector identifiers; selectors are `{prefix}1..{prefix}K`.
    pub selector_prefix: String,
    /// Whether the reducer runs [`check_parameters`](crate::check_parameters)
    /// before building anything.
    pub enforce_parameter_bounds: bool,
    /// Schema version stamped onto render exports.
    pub schema_version: SchemaVersion,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            selector_prefix: "a".to_owned(),
            enforce_parameter_bounds: false,
            schema_version: SchemaVersion::new(1, 0, 0),
        }
    }
}

impl ReductionConfig {
    /// Identifier of the `index`-th selector (1-based).
    pub fn selector_id(&self, index: usize) -> String {
        format!("{}{index}", self.selector_prefix)
    }
}
