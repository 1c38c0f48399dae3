//! The record capability trait.

use crate::field::ColumnDef;
use crate::relation::RelationDef;
use crate::table::table_name_from;
use crate::value::Value;

/// A typed entity mapped to one row of a backing table.
///
/// Each concrete record type implements this trait once, supplying its schema
/// and relation metadata statically. The mapping engine drives every CRUD and
/// hydration step through this interface and never inspects instances
/// structurally.
///
/// # Contract
///
/// - `id` is the identity column; `None` means "not yet persisted". It is
///   handled through [`id`](Record::id) / [`set_id`](Record::set_id), never
///   through `get`/`set`.
/// - `get` returns [`Value::Null`] for unset properties and for names the type
///   does not declare; `set` ignores unknown names. Both deal only with the
///   non-id columns listed in [`schema`](Record::schema).
/// - [`schema`](Record::schema) and [`relations`](Record::relations) must be
///   stable for the life of the program, and a relation name must never
///   collide with a column name.
///
/// # Example
///
/// ```
/// use activerow_core::{ColumnDef, Record, RelationDef, Value};
///
/// #[derive(Debug, Default)]
/// struct Hero {
///     id: Option<i64>,
///     name: Option<String>,
///     team_id: Option<i64>,
/// }
///
/// impl Record for Hero {
///     fn schema() -> &'static [ColumnDef] {
///         const { &[ColumnDef::text("name"), ColumnDef::int("team_id")] }
///     }
///
///     fn relations() -> &'static [RelationDef] {
///         const { &[RelationDef::to_one("team").match_column("id").local_property("team_id")] }
///     }
///
///     fn id(&self) -> Option<i64> {
///         self.id
///     }
///
///     fn set_id(&mut self, id: i64) {
///         self.id = Some(id);
///     }
///
///     fn get(&self, column: &str) -> Value {
///         match column {
///             "name" => Value::from(self.name.clone()),
///             "team_id" => Value::from(self.team_id),
///             _ => Value::Null,
///         }
///     }
///
///     fn set(&mut self, column: &str, value: Value) {
///         match column {
///             "name" => self.name = value.as_str().map(str::to_string),
///             "team_id" => self.team_id = value.as_int(),
///             _ => {}
///         }
///     }
/// }
///
/// assert_eq!(Hero::columns(), vec!["id", "name", "team_id"]);
/// ```
pub trait Record: Default {
    /// The fully-qualified name this type's table is derived from.
    ///
    /// Only consulted when [`table_override`](Record::table_override) is
    /// absent.
    #[must_use]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Explicit table name override for this type.
    #[must_use]
    fn table_override() -> Option<&'static str> {
        None
    }

    /// The declared non-id columns, in declaration order.
    fn schema() -> &'static [ColumnDef];

    /// The declared relations. Empty by default.
    #[must_use]
    fn relations() -> &'static [RelationDef] {
        &[]
    }

    /// Current identifier, `None` while unpersisted.
    fn id(&self) -> Option<i64>;

    /// Assign the identifier. Called by the engine after a successful insert.
    fn set_id(&mut self, id: i64);

    /// Current value of a non-id column; `Value::Null` when unset or unknown.
    fn get(&self, column: &str) -> Value;

    /// Assign a non-id column. Unknown names are ignored.
    fn set(&mut self, column: &str, value: Value);

    /// The physical table name: the override if present, else derived from
    /// [`type_name`](Record::type_name).
    #[must_use]
    fn table() -> String {
        Self::table_override().map_or_else(|| table_name_from(Self::type_name()), str::to_string)
    }

    /// The ordered column set: `"id"` first, then the schema names, minus any
    /// `"id"` duplicate and minus any name also declared as a relation.
    ///
    /// Deterministic and stable for a given type across calls.
    #[must_use]
    fn columns() -> Vec<&'static str> {
        let mut columns = vec!["id"];
        for def in Self::schema() {
            if def.name == "id" {
                continue;
            }
            if Self::relations().iter().any(|r| r.name == def.name) {
                continue;
            }
            columns.push(def.name);
        }
        columns
    }

    /// Look up a declared relation by name.
    #[must_use]
    fn relation(name: &str) -> Option<&'static RelationDef> {
        Self::relations().iter().find(|r| r.name == name)
    }
}
