use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::extract::{ApiJson, ApiPath};
use super::validation::validate_id;
use super::{ApiError, AppState, PlanetDto};
use crate::domain::EntityKind;
use crate::models::PlanetChanges;
use crate::services::CreatePlanetRequest;

pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanetDto>>, ApiError> {
    let planets = state.planet_service().list().await?;
    Ok(Json(planets))
}

pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<PlanetDto>, ApiError> {
    let id = validate_id(EntityKind::Planet, id)?;
    Ok(Json(state.planet_service().get(id).await?))
}

pub async fn create_planet(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetDto>), ApiError> {
    let planet = state.planet_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

pub async fn update_planet(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<PlanetChanges>,
) -> Result<Json<PlanetDto>, ApiError> {
    let id = validate_id(EntityKind::Planet, id)?;
    Ok(Json(state.planet_service().update(id, changes).await?))
}

/// Residents go with the planet.
pub async fn delete_planet(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(EntityKind::Planet, id)?;
    state.planet_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
