//! Identity-based portable form.
//!
//! A record's portable representation is solely its identifier: producing one
//! guarantees the record is persisted first, and rehydrating one costs a
//! single fetch of the full stored row. There is no caching at this layer.

use activerow_core::{Record, ValueCodec};
use activerow_query::{Executor, Query};
use serde::{Deserialize, Serialize};

use crate::engine::Mapper;

/// The portable form of a persisted record: its identifier, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableId {
    /// The stored row's identifier.
    pub id: i64,
}

impl PortableId {
    /// Wrap an identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id }
    }
}

impl<E: Executor, C: ValueCodec> Mapper<E, C> {
    /// Produce the portable form of a record.
    ///
    /// An unpersisted record is saved first (exactly once) so an identifier
    /// is guaranteed to exist. `None` when that save fails.
    pub fn to_portable<R: Record>(&self, record: &mut R) -> Option<PortableId> {
        if record.id().is_none() && !self.save(record) {
            return None;
        }
        record.id().map(PortableId::new)
    }

    /// Rehydrate a record from its portable form.
    ///
    /// One query per call. `None` when no stored row carries the identifier.
    pub fn from_portable<R: Record>(&self, portable: PortableId) -> Option<R> {
        let mut record = R::default();
        self.restore(&mut record, portable).then_some(record)
    }

    /// Restore a record in place from its portable form.
    ///
    /// Fetches the stored row and copies the identifier and every column onto
    /// `record`, overwriting its current properties. When no stored row
    /// carries the identifier, returns `false` and leaves `record` untouched.
    pub fn restore<R: Record>(&self, record: &mut R, portable: PortableId) -> bool {
        let Some(fetched) = self.fetch_one::<R>(Query::new().filter("id", portable.id)) else {
            return false;
        };
        if let Some(id) = fetched.id() {
            record.set_id(id);
        }
        for column in R::columns() {
            if column == "id" {
                continue;
            }
            record.set(column, fetched.get(column));
        }
        true
    }
}
