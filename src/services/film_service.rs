//! Domain service for films and their cast/planet associations.

use serde::Deserialize;

use crate::api::types::FilmDto;
use crate::domain::CatalogError;
use crate::models::FilmChanges;

/// Body of `POST /films`. `characters` and `planets` are id lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateFilmRequest {
    pub title: Option<String>,
    pub director: Option<String>,
    pub release_date: Option<String>,
    pub characters: Option<Vec<i32>>,
    pub planets: Option<Vec<i32>>,
}

#[async_trait::async_trait]
pub trait FilmService: Send + Sync {
    async fn list(&self) -> Result<Vec<FilmDto>, CatalogError>;

    async fn get(&self, id: i32) -> Result<FilmDto, CatalogError>;

    /// Fails with [`CatalogError::Conflict`] when the title is taken and with
    /// [`CatalogError::Validation`] when a linked id does not exist.
    async fn create(&self, request: CreateFilmRequest) -> Result<FilmDto, CatalogError>;

    async fn update(&self, id: i32, changes: FilmChanges) -> Result<FilmDto, CatalogError>;

    /// Removes the film and its links; people and planets are kept.
    async fn delete(&self, id: i32) -> Result<(), CatalogError>;
}
