//! The query-construction DSL.

use activerow_core::Value;

/// A pending query: a table, a set of equality filters, and a row limit.
///
/// Built by chaining; the mapping engine injects the table itself, so callers
/// normally only add filters and limits:
///
/// ```
/// use activerow_query::Query;
///
/// let query = Query::new().filter("team_id", 3_i64).limit(20);
/// assert_eq!(query.row_limit(), Some(20));
/// ```
///
/// `from` and `limit` overwrite any previously-set value; filters accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    table: Option<String>,
    filters: Vec<(String, Value)>,
    limit: Option<u64>,
}

impl Query {
    /// Start an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a table, replacing any previous target.
    #[must_use]
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add an equality condition on a column.
    #[must_use]
    pub fn filter(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    /// Cap the number of result rows, replacing any previous cap.
    #[must_use]
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// The targeted table, if one has been set.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The accumulated equality filters, in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[(String, Value)] {
        &self.filters
    }

    /// The row cap, if one has been set.
    #[must_use]
    pub fn row_limit(&self) -> Option<u64> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_accumulates_filters() {
        let query = Query::new().filter("a", 1_i64).filter("b", "x");
        assert_eq!(query.filters().len(), 2);
        assert_eq!(query.filters()[0], ("a".to_string(), Value::Int(1)));
        assert_eq!(query.filters()[1], ("b".to_string(), Value::Text("x".to_string())));
    }

    #[test]
    fn test_from_overwrites_table() {
        let query = Query::new().from("drafts").from("heroes");
        assert_eq!(query.table(), Some("heroes"));
    }

    #[test]
    fn test_limit_overwrites_limit() {
        let query = Query::new().limit(50).limit(1);
        assert_eq!(query.row_limit(), Some(1));
    }

    #[test]
    fn test_empty_query() {
        let query = Query::new();
        assert_eq!(query.table(), None);
        assert!(query.filters().is_empty());
        assert_eq!(query.row_limit(), None);
    }
}
