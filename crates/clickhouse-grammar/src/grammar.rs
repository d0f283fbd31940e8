//! Compilation entry points for the host query builder.

use crate::{Param, parameter, parameterize, rewrite_params};

/// ClickHouse-specific compilation hooks.
///
/// A host builder keeps its own clause-assembly logic (joins, grouping,
/// ordering) and composes these hooks by function calls at its extension
/// points: marker insertion while clauses are built, rewriting once the
/// surrounding statement text exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickhouseGrammar;

impl ClickhouseGrammar {
    pub fn new() -> Self {
        Self
    }

    /// See [`parameterize`].
    pub fn parameterize(&self, count: usize) -> String {
        parameterize(count)
    }

    /// See [`parameter`].
    pub fn parameter(&self, value: &Param) -> String {
        parameter(value)
    }

    /// See [`rewrite_params`].
    pub fn rewrite(&self, sql: &str) -> String {
        rewrite_params(sql)
    }

    /// Finalize a WHERE clause the host builder has assembled. Indices are
    /// assigned here so fragments compiled after this one continue numbering
    /// above them.
    pub fn compile_wheres(&self, wheres: &str) -> String {
        rewrite_params(wheres)
    }

    /// Final pass over a fully assembled SELECT statement. Continuation-safe
    /// over clauses already finalized by [`Self::compile_wheres`].
    pub fn compile_select(&self, sql: &str) -> String {
        rewrite_params(sql)
    }

    /// Delete statement for the no-join case. ClickHouse deletes through a
    /// mutation, not standard DELETE syntax. `wheres` normally arrives
    /// pre-finalized from [`Self::compile_wheres`], making the rewrite pass a
    /// no-op; it runs anyway so no marker can leak into the final statement.
    pub fn compile_delete_without_joins(&self, table: &str, wheres: &str) -> String {
        rewrite_params(&format!("ALTER TABLE {table} DELETE {wheres}"))
    }
}
