use serde::Deserialize;

use crate::domain::Patch;
use crate::entities::planet;

/// A stored planet with the ids of its residents and of the films it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetRecord {
    pub planet: planet::Model,
    pub residents: Vec<i32>,
    pub films: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

/// Body of `PUT /planets/{id}`. Only the keys present in the request change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Patch<String>,
    pub terrain: Patch<String>,
    pub population: Patch<String>,
}
