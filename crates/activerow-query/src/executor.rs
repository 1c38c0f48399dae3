//! The statement-execution contract.
//!
//! Executors own everything below the query boundary: connections,
//! transactions, timeouts, retries. The mapping engine performs one
//! synchronous round-trip per operation and adds no resilience of its own.

use activerow_core::{Result, Row, Value};

use crate::query::Query;

/// What shape of result an execution should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// A set of result rows.
    Rows,
    /// A scalar count of matching rows.
    Count,
    /// A success/failure boolean.
    Bool,
}

/// The result of an execution, matching the requested [`FetchMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExecResult {
    /// Result rows.
    Rows(Vec<Row>),
    /// Scalar count.
    Count(u64),
    /// Boolean outcome.
    Bool(bool),
}

impl ExecResult {
    /// The rows, or empty when the executor answered in another shape.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            ExecResult::Rows(rows) => rows,
            _ => Vec::new(),
        }
    }

    /// The count, or 0 when the executor answered in another shape.
    #[must_use]
    pub fn into_count(self) -> u64 {
        match self {
            ExecResult::Count(n) => n,
            _ => 0,
        }
    }

    /// The boolean, or `false` when the executor answered in another shape.
    #[must_use]
    pub fn into_bool(self) -> bool {
        match self {
            ExecResult::Bool(b) => b,
            _ => false,
        }
    }
}

/// Performs storage operations for built queries.
///
/// Implementations decide how a [`Query`] maps onto their storage; the
/// contract only fixes the shapes exchanged. Hard faults are returned as
/// `Err` and surface to callers of the mapping engine only through its
/// documented soft-fail shapes.
pub trait Executor {
    /// Run a built query in the given mode.
    fn execute(&self, query: &Query, mode: FetchMode) -> Result<ExecResult>;

    /// Run a raw parameterized statement.
    ///
    /// Parameters are named: `:name` placeholders in the text correspond to
    /// `(name, value)` pairs.
    fn raw_execute(
        &self,
        statement: &str,
        params: &[(String, Value)],
        mode: FetchMode,
    ) -> Result<ExecResult>;

    /// Insert a data map into a table, returning the generated identifier or
    /// `None` when the insert did not produce one.
    fn insert(&self, table: &str, data: &Row) -> Result<Option<i64>>;

    /// Apply a data map to the rows matching a query.
    fn update(&self, query: &Query, data: &Row) -> Result<bool>;
}
