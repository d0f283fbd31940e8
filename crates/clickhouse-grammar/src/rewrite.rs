//! Marker-to-placeholder rewriting.

use std::sync::LazyLock;

use regex::Regex;

use crate::PARAM_MARKER;

// `:7` and `:p7` occupy one index namespace: the driver layer may rewrite
// `:N` into `:pN` before execution, and a recompiled fragment must still
// see those indices as consumed.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":p?(\d+)").expect("valid regex"));

/// Next unused placeholder index in `sql`: one past the highest `:N` or
/// `:pN` found, or 0 when none are present.
pub fn next_param_index(sql: &str) -> usize {
    PLACEHOLDER_REGEX
        .captures_iter(sql)
        // all-digit capture, so parse only fails on overflow; a suffix too
        // large for usize still counts as consumed
        .map(|cap| cap[1].parse::<usize>().unwrap_or(usize::MAX))
        .max()
        .map_or(0, |idx| idx.saturating_add(1))
}

/// Replace every marker in `sql` with sequential `:N` placeholders, numbered
/// left-to-right and continuing above the highest index already present.
///
/// Safe to call at any point while a statement is assembled: marker-free
/// input comes back unchanged, and indices assigned by an earlier pass are
/// never reassigned. Each call must see the cumulative statement text built
/// so far; numbering two fragments in isolation and concatenating them
/// afterwards produces colliding indices.
pub fn rewrite_params(sql: &str) -> String {
    let mut sql = sql.to_string();
    let mut index = next_param_index(&sql);
    while let Some(pos) = sql.find(PARAM_MARKER) {
        sql.replace_range(pos..pos + PARAM_MARKER.len(), &format!(":{index}"));
        index = index.saturating_add(1);
    }
    sql
}
