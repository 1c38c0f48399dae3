//! Relation metadata.
//!
//! Relations are declared as static metadata on each record type and
//! interpreted lazily by the mapping engine. A relation is never itself a
//! column: its key is excluded from the type's column set, and resolving one
//! always costs a fresh query.

/// How many related records a relation yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// At most one related record.
    ToOne,
    /// Any number of related records.
    ToMany,
}

/// Declarative metadata for one relation of a record type.
///
/// The *target type* is not part of the definition; it is carried by the typed
/// accessor that resolves the relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// Name of the relation. Must not collide with any column name.
    pub name: &'static str,

    /// Whether the relation yields one record or many.
    pub cardinality: Cardinality,

    /// Column on the target table to filter by. When absent, the relation
    /// fetch is unfiltered and bounded by a default limit instead.
    pub match_column: Option<&'static str>,

    /// Property on the owning record whose value is matched against
    /// `match_column`. When the property is unset at resolution time, the
    /// literal property name is used as the match value instead.
    pub local_property: Option<&'static str>,
}

impl RelationDef {
    /// Declare a to-one relation.
    #[must_use]
    pub const fn to_one(name: &'static str) -> Self {
        Self {
            name,
            cardinality: Cardinality::ToOne,
            match_column: None,
            local_property: None,
        }
    }

    /// Declare a to-many relation.
    #[must_use]
    pub const fn to_many(name: &'static str) -> Self {
        Self {
            name,
            cardinality: Cardinality::ToMany,
            match_column: None,
            local_property: None,
        }
    }

    /// Set the target-table column to filter by.
    #[must_use]
    pub const fn match_column(mut self, column: &'static str) -> Self {
        self.match_column = Some(column);
        self
    }

    /// Set the owning-record property supplying the match value.
    #[must_use]
    pub const fn local_property(mut self, property: &'static str) -> Self {
        self.local_property = Some(property);
        self
    }
}
