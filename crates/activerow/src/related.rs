//! Lazy relation resolution.
//!
//! Relations are declared as static metadata on the owning record type and
//! resolved on demand: every access is a fresh query through the mapper, with
//! no memoization at this layer. Callers that want caching add it outside.

use std::marker::PhantomData;

use activerow_core::{Cardinality, Record, RelationDef, Value, ValueCodec};
use activerow_query::{Executor, Query};
use tracing::{debug, warn};

use crate::engine::Mapper;

/// Row cap applied to a relation fetch that has no match column.
///
/// Without it a definition that declares no filter would fetch an unbounded
/// table scan on every access.
pub const UNFILTERED_RELATION_LIMIT: u64 = 10;

impl<E: Executor, C: ValueCodec> Mapper<E, C> {
    /// Resolve a declared to-one relation of `record` to a `T`.
    ///
    /// Yields `None`, silently and without fault, when the name is not
    /// declared on `R`, when the declared cardinality is not to-one, or when
    /// no related row matches.
    pub fn related_one<R: Record, T: Record>(&self, record: &R, name: &str) -> Option<T> {
        let def = self.declared::<R>(name, Cardinality::ToOne)?;
        self.fetch_one(self.relation_query(record, def))
    }

    /// Resolve a declared to-many relation of `record` to a vec of `T`.
    ///
    /// Silently empty on an undeclared name or a cardinality mismatch.
    pub fn related_many<R: Record, T: Record>(&self, record: &R, name: &str) -> Vec<T> {
        match self.declared::<R>(name, Cardinality::ToMany) {
            Some(def) => self.fetch_many(self.relation_query(record, def)),
            None => Vec::new(),
        }
    }

    fn declared<R: Record>(
        &self,
        name: &str,
        expected: Cardinality,
    ) -> Option<&'static RelationDef> {
        let Some(def) = R::relation(name) else {
            debug!(table = %R::table(), relation = name, "relation not declared");
            return None;
        };
        if def.cardinality != expected {
            debug!(table = %R::table(), relation = name, "relation cardinality mismatch");
            return None;
        }
        Some(def)
    }

    fn relation_query<R: Record>(&self, record: &R, def: &RelationDef) -> Query {
        match def.match_column {
            Some(column) => Query::new().filter(column, self.match_value(record, def)),
            None => Query::new().limit(UNFILTERED_RELATION_LIMIT),
        }
    }

    /// The value matched against the relation's target column.
    ///
    /// Taken from the owning record's `local_property` when that property is
    /// set. An unset property falls back to the literal property name as the
    /// match value, kept for compatibility with existing relation
    /// definitions; the fallback is warn-logged because it is rarely what a
    /// definition intends.
    fn match_value<R: Record>(&self, record: &R, def: &RelationDef) -> Value {
        let Some(property) = def.local_property else {
            return Value::Null;
        };
        let value = if property == "id" {
            record.id().map_or(Value::Null, Value::Int)
        } else {
            record.get(property)
        };
        if value.is_null() {
            warn!(
                table = %R::table(),
                relation = def.name,
                property,
                "local property unset, using its literal name as the match value"
            );
            return Value::Text(property.to_string());
        }
        value
    }
}

/// A typed, lazily-evaluated handle for a declared to-one relation.
///
/// Declared once per relation, usually as a const:
///
/// ```ignore
/// const TEAM: Related<Team> = Related::new("team");
/// let team = TEAM.load(&db, &hero);
/// ```
///
/// `load` re-runs resolution on every call.
pub struct Related<T: Record> {
    name: &'static str,
    _target: PhantomData<fn() -> T>,
}

impl<T: Record> Related<T> {
    /// Bind a handle to a declared relation name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _target: PhantomData,
        }
    }

    /// The relation name this handle resolves.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve against an owning record.
    pub fn load<R: Record, E: Executor, C: ValueCodec>(
        &self,
        mapper: &Mapper<E, C>,
        owner: &R,
    ) -> Option<T> {
        mapper.related_one::<R, T>(owner, self.name)
    }
}

/// A typed, lazily-evaluated handle for a declared to-many relation.
pub struct RelatedMany<T: Record> {
    name: &'static str,
    _target: PhantomData<fn() -> T>,
}

impl<T: Record> RelatedMany<T> {
    /// Bind a handle to a declared relation name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _target: PhantomData,
        }
    }

    /// The relation name this handle resolves.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve against an owning record.
    pub fn load<R: Record, E: Executor, C: ValueCodec>(
        &self,
        mapper: &Mapper<E, C>,
        owner: &R,
    ) -> Vec<T> {
        mapper.related_many::<R, T>(owner, self.name)
    }
}

impl<T: Record> Clone for Related<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Record> Copy for Related<T> {}

impl<T: Record> std::fmt::Debug for Related<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Related").field("name", &self.name).finish()
    }
}

impl<T: Record> Clone for RelatedMany<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Record> Copy for RelatedMany<T> {}

impl<T: Record> std::fmt::Debug for RelatedMany<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelatedMany").field("name", &self.name).finish()
    }
}
