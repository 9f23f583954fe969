pub mod prelude;

pub mod film;
pub mod people;
pub mod people_films;
pub mod planet;
pub mod planet_films;
pub mod users;
