use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    FilmService, PeopleService, PlanetService, SeaOrmFilmService, SeaOrmPeopleService,
    SeaOrmPlanetService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub planet_service: Arc<dyn PlanetService>,

    pub people_service: Arc<dyn PeopleService>,

    pub film_service: Arc<dyn FilmService>,
}

impl SharedState {
    /// Connects to `general.database_url`, applies migrations and wires the services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let planet_service =
            Arc::new(SeaOrmPlanetService::new(store.clone())) as Arc<dyn PlanetService>;
        let people_service =
            Arc::new(SeaOrmPeopleService::new(store.clone())) as Arc<dyn PeopleService>;
        let film_service = Arc::new(SeaOrmFilmService::new(store.clone())) as Arc<dyn FilmService>;

        Self {
            config: Arc::new(config),
            store,
            planet_service,
            people_service,
            film_service,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
