//! Catalog records as the repositories hand them out, plus the write inputs
//! they accept. Relationship fields are resolved to ascending id lists.

pub mod film;
pub mod people;
pub mod planet;

pub use film::{FilmChanges, FilmRecord, NewFilm};
pub use people::{NewPerson, PersonChanges, PersonRecord};
pub use planet::{NewPlanet, PlanetChanges, PlanetRecord};
