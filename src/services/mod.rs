pub mod planet_service;
pub mod planet_service_impl;
pub use planet_service::{CreatePlanetRequest, PlanetService};
pub use planet_service_impl::SeaOrmPlanetService;

pub mod people_service;
pub mod people_service_impl;
pub use people_service::{CreatePersonRequest, PeopleService};
pub use people_service_impl::SeaOrmPeopleService;

pub mod film_service;
pub mod film_service_impl;
pub use film_service::{CreateFilmRequest, FilmService};
pub use film_service_impl::SeaOrmFilmService;
