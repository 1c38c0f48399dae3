//! ActiveRow: a lazy, soft-failing active-record mapper.
//!
//! A [`Record`] type declares its schema and relations once, statically; a
//! [`Mapper`] drives CRUD, hydration, lazy relation resolution, and the
//! identity-based portable form through any [`Executor`](activerow_query::Executor).
//!
//! # Quick tour
//!
//! ```ignore
//! use activerow::prelude::*;
//! use activerow_mem::MemExecutor;
//!
//! let db = Mapper::new(MemExecutor::new());
//!
//! let mut hero = Hero { name: Some("Alice".into()), ..Hero::default() };
//! db.save(&mut hero);                       // insert: id was unset
//! hero.name = Some("Alicia".into());
//! db.save(&mut hero);                       // update: same row
//!
//! let team: Option<Team> = db.related_one(&hero, "team");
//! let portable = db.to_portable(&mut hero); // { id }
//! ```
//!
//! # Failure contract
//!
//! Public mapper methods never raise storage faults: not-found and failure
//! both collapse to empty/`None`/`false`, with the underlying error logged.
//! Internals stay `Result`-based up to that boundary.

pub mod engine;
pub mod portable;
pub mod related;

pub use engine::Mapper;
pub use portable::PortableId;
pub use related::{Related, RelatedMany, UNFILTERED_RELATION_LIMIT};

// Re-export the contract and query layers so most users need one dependency.
pub use activerow_core::{
    Cardinality, ColumnDef, Error, JsonCodec, Record, RelationDef, Result, Row, Stored, Value,
    ValueCodec, ValueKind, table_name_from,
};
pub use activerow_query::{ExecResult, Executor, FetchMode, Query};

/// Everything a typical caller needs.
pub mod prelude {
    pub use crate::engine::Mapper;
    pub use crate::portable::PortableId;
    pub use crate::related::{Related, RelatedMany};
    pub use activerow_core::{
        Cardinality, ColumnDef, Record, RelationDef, Row, Value, ValueKind,
    };
    pub use activerow_query::{Executor, Query};
}
