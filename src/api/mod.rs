use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{FilmService, PeopleService, PlanetService};
use crate::state::SharedState;

mod error;
mod extract;
mod films;
mod observability;
mod people;
mod planets;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        self.shared.config()
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn planet_service(&self) -> &Arc<dyn PlanetService> {
        &self.shared.planet_service
    }

    #[must_use]
    pub fn people_service(&self) -> &Arc<dyn PeopleService> {
        &self.shared.people_service
    }

    #[must_use]
    pub fn film_service(&self) -> &Arc<dyn FilmService> {
        &self.shared.film_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(catalog_routes())
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

/// Collection paths are served with and without a trailing slash.
fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/planets",
            get(planets::list_planets).post(planets::create_planet),
        )
        .route(
            "/planets/",
            get(planets::list_planets).post(planets::create_planet),
        )
        .route(
            "/planets/{id}",
            get(planets::get_planet)
                .put(planets::update_planet)
                .delete(planets::delete_planet),
        )
        .route(
            "/peoples",
            get(people::list_people).post(people::create_person),
        )
        .route(
            "/peoples/",
            get(people::list_people).post(people::create_person),
        )
        .route(
            "/peoples/{id}",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        )
        .route("/films", get(films::list_films).post(films::create_film))
        .route("/films/", get(films::list_films).post(films::create_film))
        .route(
            "/films/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
}
