use serde::Deserialize;

use crate::domain::Patch;
use crate::entities::people;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub person: people::Model,
    pub films: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<i32>,
}

/// Body of `PUT /peoples/{id}`.
///
/// `homeworld` is a planet id; `null` detaches the person from their planet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub height: Patch<String>,
    pub mass: Patch<String>,
    pub gender: Patch<String>,
    pub homeworld: Patch<i32>,
}
