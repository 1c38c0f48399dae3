//! The record mapping engine.

use activerow_core::{Error, JsonCodec, Record, Result, Row, Value, ValueCodec, ValueKind};
use activerow_query::{Executor, FetchMode, Query};
use tracing::{debug, warn};

/// Orchestrates CRUD between record types and an executor.
///
/// A `Mapper` owns the executor and the value codec; every operation is one
/// synchronous round-trip through them. It holds no caches and no locks.
///
/// # Soft-fail boundary
///
/// Public methods never surface executor faults. Not-found and failure both
/// collapse to the documented shapes (an empty vec, `None`, or `false`), and
/// the underlying error is logged at `warn` level. Callers that need to
/// distinguish the two should instrument the executor, not this layer.
///
/// # Example
///
/// ```ignore
/// let db = Mapper::new(MemExecutor::new());
/// let mut hero = Hero { name: Some("Alice".into()), ..Hero::default() };
/// assert!(db.save(&mut hero));
/// let found: Option<Hero> = db.fetch_one(Query::new().filter("name", "Alice"));
/// ```
#[derive(Debug)]
pub struct Mapper<E, C = JsonCodec> {
    executor: E,
    codec: C,
}

impl<E: Executor> Mapper<E> {
    /// Create a mapper over an executor, with the default JSON codec.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            codec: JsonCodec,
        }
    }
}

impl<E: Executor, C: ValueCodec> Mapper<E, C> {
    /// Create a mapper with an explicit codec.
    pub fn with_codec(executor: E, codec: C) -> Self {
        Self { executor, codec }
    }

    /// Borrow the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Fetch every record matching `query`.
    ///
    /// The record type's table is bound onto the query, replacing any table
    /// the caller set. Returns an empty vec on no matches and on executor
    /// failure alike.
    pub fn fetch_many<R: Record>(&self, query: Query) -> Vec<R> {
        match self.try_fetch_many(query) {
            Ok(records) => records,
            Err(error) => {
                warn!(table = %R::table(), %error, "fetch_many failed");
                Vec::new()
            }
        }
    }

    fn try_fetch_many<R: Record>(&self, query: Query) -> Result<Vec<R>> {
        let query = query.from(R::table());
        let rows = self.executor.execute(&query, FetchMode::Rows)?.into_rows();
        Ok(rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| self.hydrate::<R>(row))
            .collect())
    }

    /// Fetch the first record matching `query`.
    ///
    /// Forces `limit = 1`, overriding any limit the caller set.
    pub fn fetch_one<R: Record>(&self, query: Query) -> Option<R> {
        self.fetch_many(query.limit(1)).into_iter().next()
    }

    /// Count the records matching `query`. 0 on failure.
    pub fn count<R: Record>(&self, query: Query) -> u64 {
        match self.try_count::<R>(query) {
            Ok(n) => n,
            Err(error) => {
                warn!(table = %R::table(), %error, "count failed");
                0
            }
        }
    }

    fn try_count<R: Record>(&self, query: Query) -> Result<u64> {
        let query = query.from(R::table());
        Ok(self.executor.execute(&query, FetchMode::Count)?.into_count())
    }

    /// Insert a record, assigning its generated identifier on success.
    ///
    /// `false` when the executor reports no identifier (soft failure) or
    /// faults.
    pub fn insert<R: Record>(&self, record: &mut R) -> bool {
        match self.try_insert(record) {
            Ok(inserted) => inserted,
            Err(error) => {
                warn!(table = %R::table(), %error, "insert failed");
                false
            }
        }
    }

    fn try_insert<R: Record>(&self, record: &mut R) -> Result<bool> {
        let data = self.outbound_data(record);
        match self.executor.insert(&R::table(), &data)? {
            Some(id) => {
                record.set_id(id);
                debug!(table = %R::table(), id, "inserted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write a record's current data back to its stored row.
    ///
    /// The identity is never changed. `false` on an unsaved record, on
    /// executor refusal, or on fault.
    pub fn update<R: Record>(&self, record: &R) -> bool {
        match self.try_update(record) {
            Ok(updated) => updated,
            Err(error) => {
                warn!(table = %R::table(), %error, "update failed");
                false
            }
        }
    }

    fn try_update<R: Record>(&self, record: &R) -> Result<bool> {
        let id = record.id().ok_or(Error::MissingId)?;
        let query = Query::new().from(R::table()).filter("id", id).limit(1);
        self.executor.update(&query, &self.outbound_data(record))
    }

    /// Insert if the record has no identifier yet, update otherwise.
    pub fn save<R: Record>(&self, record: &mut R) -> bool {
        if record.id().is_none() {
            self.insert(record)
        } else {
            self.update(record)
        }
    }

    /// Delete a record's stored row by identifier.
    ///
    /// The in-memory instance is left untouched and becomes orphaned: later
    /// updates through it affect zero rows.
    pub fn delete<R: Record>(&self, record: &R) -> bool {
        match self.try_delete(record) {
            Ok(deleted) => deleted,
            Err(error) => {
                warn!(table = %R::table(), %error, "delete failed");
                false
            }
        }
    }

    fn try_delete<R: Record>(&self, record: &R) -> Result<bool> {
        let id = record.id().ok_or(Error::MissingId)?;
        let statement = format!("DELETE FROM {} WHERE id = :id", R::table());
        let params = [("id".to_string(), Value::Int(id))];
        Ok(self
            .executor
            .raw_execute(&statement, &params, FetchMode::Bool)?
            .into_bool())
    }

    /// Build a record instance from a raw result row.
    ///
    /// Starts from `R::default()`, then assigns the decoded value of every
    /// declared column present in the row. Unknown row keys are ignored,
    /// missing keys leave properties at their defaults, and a cell the codec
    /// rejects is skipped with a warning.
    pub fn hydrate<R: Record>(&self, row: &Row) -> R {
        let mut record = R::default();
        if let Some(cell) = row.get("id") {
            match self.codec.decode(cell, ValueKind::Int) {
                Ok(Value::Int(id)) => record.set_id(id),
                Ok(_) => {}
                Err(error) => {
                    warn!(table = %R::table(), column = "id", %error, "skipping undecodable cell");
                }
            }
        }
        for def in R::schema() {
            if def.name == "id" || R::relation(def.name).is_some() {
                continue;
            }
            let Some(cell) = row.get(def.name) else {
                continue;
            };
            match self.codec.decode(cell, def.kind) {
                Ok(value) => record.set(def.name, value),
                Err(error) => {
                    let error = error.for_column(def.name);
                    warn!(table = %R::table(), column = def.name, %error, "skipping undecodable cell");
                }
            }
        }
        record
    }

    /// Build the outbound data map for a record.
    ///
    /// Includes the codec-encoded value of every column whose current value
    /// is non-null; writes are therefore always partial, and a record can
    /// never null out a stored column through save.
    pub fn outbound_data<R: Record>(&self, record: &R) -> Row {
        let mut data = Row::new();
        for column in R::columns() {
            let value = if column == "id" {
                record.id().map_or(Value::Null, Value::Int)
            } else {
                record.get(column)
            };
            if value.is_null() {
                continue;
            }
            data.set(column, self.codec.encode(&value));
        }
        data
    }
}
