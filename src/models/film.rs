use serde::Deserialize;

use crate::domain::Patch;
use crate::entities::film;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    pub film: film::Model,
    pub characters: Vec<i32>,
    pub planets: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewFilm {
    pub title: String,
    pub director: Option<String>,
    pub release_date: Option<String>,
    pub characters: Vec<i32>,
    pub planets: Vec<i32>,
}

/// Body of `PUT /films/{id}`.
///
/// A present `characters` or `planets` list replaces the whole association set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilmChanges {
    pub title: Option<String>,
    pub director: Patch<String>,
    pub release_date: Patch<String>,
    pub characters: Option<Vec<i32>>,
    pub planets: Option<Vec<i32>>,
}
