pub use super::film::Entity as Film;
pub use super::people::Entity as People;
pub use super::people_films::Entity as PeopleFilms;
pub use super::planet::Entity as Planet;
pub use super::planet_films::Entity as PlanetFilms;
pub use super::users::Entity as Users;
