//! Placeholder markers for bindable values.

/// Stand-in emitted wherever a value will be bound, rewritten into `:N`
/// placeholders once the surrounding statement text is assembled. Must never
/// occur naturally in SQL.
pub const PARAM_MARKER: &str = "#@?";

/// A value position in a compiled fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A value the driver binds at execution time.
    Value,
    /// Raw SQL embedded verbatim (escape hatch), never parameterized.
    Raw(String),
}

impl Param {
    pub fn raw(sql: impl Into<String>) -> Self {
        Param::Raw(sql.into())
    }
}

/// Markers for `count` values, joined with `", "` for multi-value contexts
/// such as `IN (...)` lists.
pub fn parameterize(count: usize) -> String {
    vec![PARAM_MARKER; count].join(", ")
}

/// Marker for a single value. Raw expressions pass through unchanged.
pub fn parameter(value: &Param) -> String {
    match value {
        Param::Value => PARAM_MARKER.to_string(),
        Param::Raw(sql) => sql.clone(),
    }
}
