use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::extract::{ApiJson, ApiPath};
use super::validation::validate_id;
use super::{ApiError, AppState, PeopleDto};
use crate::domain::EntityKind;
use crate::models::PersonChanges;
use crate::services::CreatePersonRequest;

pub async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PeopleDto>>, ApiError> {
    let people = state.people_service().list().await?;
    Ok(Json(people))
}

pub async fn get_person(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<PeopleDto>, ApiError> {
    let id = validate_id(EntityKind::People, id)?;
    Ok(Json(state.people_service().get(id).await?))
}

pub async fn create_person(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PeopleDto>), ApiError> {
    if let Some(homeworld) = payload.homeworld {
        validate_id(EntityKind::Planet, homeworld)?;
    }

    let person = state.people_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn update_person(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<PersonChanges>,
) -> Result<Json<PeopleDto>, ApiError> {
    let id = validate_id(EntityKind::People, id)?;
    if let Some(homeworld) = changes.homeworld.as_set() {
        validate_id(EntityKind::Planet, *homeworld)?;
    }

    Ok(Json(state.people_service().update(id, changes).await?))
}

pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(EntityKind::People, id)?;
    state.people_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
