//! Shared record types for the integration tests.
#![allow(dead_code)]

use activerow::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Hero {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub power_level: Option<i64>,
    pub team_id: Option<i64>,
    pub mentor_name: Option<String>,
}

impl Record for Hero {
    fn table_override() -> Option<&'static str> {
        Some("heroes")
    }

    fn schema() -> &'static [ColumnDef] {
        const {
            &[
                ColumnDef::text("name"),
                ColumnDef::int("power_level"),
                ColumnDef::int("team_id"),
                ColumnDef::text("mentor_name"),
            ]
        }
    }

    fn relations() -> &'static [RelationDef] {
        const {
            &[
                RelationDef::to_one("team")
                    .match_column("id")
                    .local_property("team_id"),
                // `mentor_name` is normally unset, so resolving this exercises
                // the literal-name fallback.
                RelationDef::to_one("mentor")
                    .match_column("name")
                    .local_property("mentor_name"),
            ]
        }
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn get(&self, column: &str) -> Value {
        match column {
            "name" => Value::from(self.name.clone()),
            "power_level" => Value::from(self.power_level),
            "team_id" => Value::from(self.team_id),
            "mentor_name" => Value::from(self.mentor_name.clone()),
            _ => Value::Null,
        }
    }

    fn set(&mut self, column: &str, value: Value) {
        match column {
            "name" => self.name = value.as_str().map(str::to_string),
            "power_level" => self.power_level = value.as_int(),
            "team_id" => self.team_id = value.as_int(),
            "mentor_name" => self.mentor_name = value.as_str().map(str::to_string),
            _ => {}
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Team {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Record for Team {
    fn table_override() -> Option<&'static str> {
        Some("teams")
    }

    fn schema() -> &'static [ColumnDef] {
        const { &[ColumnDef::text("name")] }
    }

    fn relations() -> &'static [RelationDef] {
        const {
            &[
                RelationDef::to_many("heroes")
                    .match_column("team_id")
                    .local_property("id"),
                // No match column: resolves to a bounded unfiltered fetch.
                RelationDef::to_many("spotlight"),
            ]
        }
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn get(&self, column: &str) -> Value {
        match column {
            "name" => Value::from(self.name.clone()),
            _ => Value::Null,
        }
    }

    fn set(&mut self, column: &str, value: Value) {
        if column == "name" {
            self.name = value.as_str().map(str::to_string);
        }
    }
}

pub fn hero(name: &str, power_level: i64, team_id: Option<i64>) -> Hero {
    Hero {
        id: None,
        name: Some(name.to_string()),
        power_level: Some(power_level),
        team_id,
        mentor_name: None,
    }
}

pub fn team(name: &str) -> Team {
    Team {
        id: None,
        name: Some(name.to_string()),
    }
}
