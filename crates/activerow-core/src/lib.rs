//! Core types and traits for ActiveRow.
//!
//! `activerow-core` is the contract layer the rest of the workspace builds on.
//!
//! # Role In The Architecture
//!
//! - **Capability contract**: [`Record`] is the trait each concrete record
//!   type implements once, supplying its table, schema, and relation metadata
//!   statically.
//! - **Data model**: [`Value`], [`Row`], and [`Stored`] represent property
//!   values and the raw cells exchanged with the executor.
//! - **Codec boundary**: [`ValueCodec`] converts between the two; the default
//!   [`JsonCodec`] stores scalars as JSON.
//!
//! # Who Uses This Crate
//!
//! - `activerow-query` consumes [`Value`] and [`Row`] in its query and
//!   executor contracts.
//! - `activerow-mem` implements the executor contract over these types.
//! - The `activerow` facade drives [`Record`] metadata through its mapping
//!   engine.
//!
//! Most applications should use the `activerow` facade; reach for
//! `activerow-core` directly when writing executors or advanced integrations.

pub mod codec;
pub mod error;
pub mod field;
pub mod record;
pub mod relation;
pub mod row;
pub mod table;
pub mod value;

pub use codec::{JsonCodec, Stored, ValueCodec};
pub use error::{Error, Result};
pub use field::ColumnDef;
pub use record::Record;
pub use relation::{Cardinality, RelationDef};
pub use row::Row;
pub use table::table_name_from;
pub use value::{Value, ValueKind};
