//! An in-memory [`Executor`] for ActiveRow.
//!
//! `MemExecutor` keeps tables as plain vectors of rows behind a mutex. It
//! exists for tests, examples, and prototyping: it honors the full executor
//! contract (equality filters, row limits, generated identifiers, update
//! merging, and the engine's delete statement) without any I/O.
//!
//! Failure injection (`fail_next_insert`, `fail_next_update`, `poison`) lets
//! tests exercise the mapping engine's soft-fail boundary deterministically.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use activerow_core::{Error, JsonCodec, Result, Row, Value, ValueCodec};
use activerow_query::{ExecResult, Executor, FetchMode, Query};
use tracing::debug;

/// Configuration for [`MemExecutor`].
#[derive(Debug, Clone)]
pub struct MemConfig {
    /// The first identifier handed out by insert.
    pub first_id: i64,
}

impl Default for MemConfig {
    fn default() -> Self {
        Self { first_id: 1 }
    }
}

#[derive(Debug, Default)]
struct MemState {
    tables: HashMap<String, Vec<Row>>,
    next_id: i64,
    fail_next_insert: bool,
    fail_next_update: bool,
    poisoned: Option<String>,
}

/// In-memory executor backed by per-table row vectors.
#[derive(Debug)]
pub struct MemExecutor {
    state: Mutex<MemState>,
    codec: JsonCodec,
}

impl Default for MemExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl MemExecutor {
    /// Create an executor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MemConfig::default())
    }

    /// Create an executor with explicit configuration.
    #[must_use]
    pub fn with_config(config: MemConfig) -> Self {
        Self {
            state: Mutex::new(MemState {
                next_id: config.first_id,
                ..MemState::default()
            }),
            codec: JsonCodec,
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, MemState>> {
        let guard = self
            .state
            .lock()
            .map_err(|_| Error::Execution("executor state poisoned".to_string()))?;
        if let Some(msg) = &guard.poisoned {
            return Err(Error::Execution(msg.clone()));
        }
        Ok(guard)
    }

    /// Make the next insert report no generated identifier (soft failure).
    pub fn fail_next_insert(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.fail_next_insert = true;
        }
    }

    /// Make the next update report `false` (soft failure).
    pub fn fail_next_update(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.fail_next_update = true;
        }
    }

    /// Make every subsequent operation return a hard execution fault.
    pub fn poison(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.poisoned = Some(message.into());
        }
    }

    /// Snapshot of a table's rows, for assertions.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.state()
            .map(|state| state.tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Number of rows currently stored in a table.
    #[must_use]
    pub fn table_len(&self, table: &str) -> usize {
        self.rows(table).len()
    }

    fn matches(&self, row: &Row, filters: &[(String, Value)]) -> bool {
        filters.iter().all(|(column, value)| {
            let wanted = self.codec.encode(value);
            match row.get(column) {
                Some(cell) => *cell == wanted,
                // An absent cell only matches a null filter value.
                None => wanted.is_null(),
            }
        })
    }

    fn select(&self, state: &MemState, query: &Query) -> Result<Vec<Row>> {
        let table = query
            .table()
            .ok_or_else(|| Error::Execution("query has no table".to_string()))?;
        let rows = state.tables.get(table).map(Vec::as_slice).unwrap_or(&[]);
        let mut matched: Vec<Row> = rows
            .iter()
            .filter(|row| self.matches(row, query.filters()))
            .cloned()
            .collect();
        if let Some(limit) = query.row_limit() {
            matched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(matched)
    }
}

/// Recognize the engine's delete statement, yielding the table name.
fn parse_delete(statement: &str) -> Option<&str> {
    let rest = statement.strip_prefix("DELETE FROM ")?;
    let table = rest.strip_suffix(" WHERE id = :id")?;
    (!table.is_empty()).then_some(table)
}

impl Executor for MemExecutor {
    fn execute(&self, query: &Query, mode: FetchMode) -> Result<ExecResult> {
        let state = self.state()?;
        let matched = self.select(&state, query)?;
        debug!(table = query.table(), matched = matched.len(), ?mode, "execute");
        Ok(match mode {
            FetchMode::Rows => ExecResult::Rows(matched),
            FetchMode::Count => ExecResult::Count(matched.len() as u64),
            FetchMode::Bool => ExecResult::Bool(!matched.is_empty()),
        })
    }

    fn raw_execute(
        &self,
        statement: &str,
        params: &[(String, Value)],
        mode: FetchMode,
    ) -> Result<ExecResult> {
        let Some(table) = parse_delete(statement) else {
            return Err(Error::Unsupported(statement.to_string()));
        };
        let id = params
            .iter()
            .find(|(name, _)| name == "id")
            .and_then(|(_, value)| value.as_int())
            .ok_or_else(|| Error::Execution("delete requires an :id parameter".to_string()))?;

        let mut state = self.state()?;
        let wanted = self.codec.encode(&Value::Int(id));
        let removed = match state.tables.get_mut(table) {
            Some(rows) => {
                let before = rows.len();
                rows.retain(|row| row.get("id") != Some(&wanted));
                before - rows.len()
            }
            None => 0,
        };
        debug!(table, id, removed, "raw delete");
        Ok(match mode {
            FetchMode::Rows => ExecResult::Rows(Vec::new()),
            FetchMode::Count => ExecResult::Count(removed as u64),
            FetchMode::Bool => ExecResult::Bool(removed > 0),
        })
    }

    fn insert(&self, table: &str, data: &Row) -> Result<Option<i64>> {
        let mut state = self.state()?;
        if state.fail_next_insert {
            state.fail_next_insert = false;
            return Ok(None);
        }

        // Respect a caller-provided identifier, otherwise assign one.
        let id = match data.get("id").and_then(|cell| cell.as_i64()) {
            Some(id) => {
                state.next_id = state.next_id.max(id + 1);
                id
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
        };

        let mut row = data.clone();
        row.set("id", self.codec.encode(&Value::Int(id)));
        state.tables.entry(table.to_string()).or_default().push(row);
        debug!(table, id, "insert");
        Ok(Some(id))
    }

    fn update(&self, query: &Query, data: &Row) -> Result<bool> {
        let mut state = self.state()?;
        if state.fail_next_update {
            state.fail_next_update = false;
            return Ok(false);
        }

        let table = query
            .table()
            .ok_or_else(|| Error::Execution("query has no table".to_string()))?
            .to_string();
        let limit = query
            .row_limit()
            .map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        let mut touched = 0usize;
        if let Some(rows) = state.tables.get_mut(&table) {
            for row in rows.iter_mut() {
                if touched == limit {
                    break;
                }
                if self.matches(row, query.filters()) {
                    row.merge(data);
                    touched += 1;
                }
            }
        }
        debug!(table, touched, "update");
        Ok(touched > 0)
    }
}
