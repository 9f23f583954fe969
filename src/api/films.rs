use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::extract::{ApiJson, ApiPath};
use super::validation::validate_id;
use super::{ApiError, AppState, FilmDto};
use crate::domain::EntityKind;
use crate::models::FilmChanges;
use crate::services::CreateFilmRequest;

pub async fn list_films(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FilmDto>>, ApiError> {
    let films = state.film_service().list().await?;
    Ok(Json(films))
}

pub async fn get_film(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<FilmDto>, ApiError> {
    let id = validate_id(EntityKind::Film, id)?;
    Ok(Json(state.film_service().get(id).await?))
}

pub async fn create_film(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateFilmRequest>,
) -> Result<(StatusCode, Json<FilmDto>), ApiError> {
    let film = state.film_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(film)))
}

/// `characters` / `planets`, when present, replace the current links.
pub async fn update_film(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<FilmChanges>,
) -> Result<Json<FilmDto>, ApiError> {
    let id = validate_id(EntityKind::Film, id)?;
    Ok(Json(state.film_service().update(id, changes).await?))
}

pub async fn delete_film(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(EntityKind::Film, id)?;
    state.film_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
