//! Named-placeholder rewriting for ClickHouse SQL compilation.
//!
//! ClickHouse drivers bind values to named placeholders (`:0`, `:1`, ...)
//! rather than the positional markers most query builders emit. A builder
//! compiles a statement in several passes (select list, WHERE clauses,
//! deletes), so this crate inserts a sentinel marker wherever a value will
//! be bound and later rewrites every marker into a sequential index,
//! resuming above any indices an earlier pass already assigned.

mod grammar;
mod param;
mod rewrite;

pub use grammar::*;
pub use param::*;
pub use rewrite::*;
