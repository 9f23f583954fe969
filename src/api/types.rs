//! Client-facing representations of catalog records.
//!
//! Every scalar column is emitted by name, null included. Relationships are
//! reduced to ascending id lists, never nested objects.

use serde::Serialize;

use crate::db::User;
use crate::models::{FilmRecord, PersonRecord, PlanetRecord};

/// Error envelope returned with every non-2xx status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub residents: Vec<i32>,
    pub films: Vec<i32>,
}

impl From<PlanetRecord> for PlanetDto {
    fn from(record: PlanetRecord) -> Self {
        let PlanetRecord {
            planet,
            residents,
            films,
        } = record;

        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            residents,
            films,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    /// Planet id, or null when the person has no homeworld.
    pub homeworld: Option<i32>,
    pub films: Vec<i32>,
}

impl From<PersonRecord> for PeopleDto {
    fn from(record: PersonRecord) -> Self {
        let PersonRecord { person, films } = record;

        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            mass: person.mass,
            gender: person.gender,
            homeworld: person.planet_id,
            films,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    pub director: Option<String>,
    pub release_date: Option<String>,
    pub characters: Vec<i32>,
    pub planets: Vec<i32>,
}

impl From<FilmRecord> for FilmDto {
    fn from(record: FilmRecord) -> Self {
        let FilmRecord {
            film,
            characters,
            planets,
        } = record;

        Self {
            id: film.id,
            title: film.title,
            director: film.director,
            release_date: film.release_date,
            characters,
            planets,
        }
    }
}

/// Users are built from the repository's password-free [`User`], so there is
/// no path by which a hash could reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{people, planet};

    fn tatooine() -> PlanetRecord {
        PlanetRecord {
            planet: planet::Model {
                id: 1,
                name: "Tatooine".to_string(),
                climate: Some("arid".to_string()),
                terrain: None,
                population: Some("200000".to_string()),
            },
            residents: vec![1, 2],
            films: vec![1],
        }
    }

    #[test]
    fn test_planet_serialization() {
        let json = serde_json::to_value(PlanetDto::from(tatooine())).unwrap();

        assert_eq!(json["name"], "Tatooine");
        assert_eq!(json["climate"], "arid");
        assert!(json["terrain"].is_null());
        assert_eq!(json["residents"], serde_json::json!([1, 2]));
        assert_eq!(json["films"], serde_json::json!([1]));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let first = serde_json::to_string(&PlanetDto::from(tatooine())).unwrap();
        let second = serde_json::to_string(&PlanetDto::from(tatooine())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_people_homeworld_is_planet_id() {
        let record = PersonRecord {
            person: people::Model {
                id: 4,
                name: "Owen Lars".to_string(),
                height: Some("178".to_string()),
                mass: Some("120".to_string()),
                gender: Some("male".to_string()),
                planet_id: None,
            },
            films: Vec::new(),
        };

        let json = serde_json::to_value(PeopleDto::from(record)).unwrap();
        assert!(json["homeworld"].is_null());
        assert_eq!(json["films"], serde_json::json!([]));
        assert!(json.get("planet_id").is_none());
    }

    #[test]
    fn test_user_never_exposes_password() {
        let user = User {
            id: 1,
            email: "leia@alderaan.gov".to_string(),
            is_active: true,
        };

        let json = serde_json::to_value(UserDto::from(user)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("password"));
    }
}
