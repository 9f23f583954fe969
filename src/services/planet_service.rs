//! Domain service for planets.

use serde::Deserialize;

use crate::api::types::PlanetDto;
use crate::domain::CatalogError;
use crate::models::PlanetChanges;

/// Body of `POST /planets`. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

#[async_trait::async_trait]
pub trait PlanetService: Send + Sync {
    async fn list(&self) -> Result<Vec<PlanetDto>, CatalogError>;

    async fn get(&self, id: i32) -> Result<PlanetDto, CatalogError>;

    /// Fails with [`CatalogError::Conflict`] when the name is taken.
    async fn create(&self, request: CreatePlanetRequest) -> Result<PlanetDto, CatalogError>;

    async fn update(&self, id: i32, changes: PlanetChanges) -> Result<PlanetDto, CatalogError>;

    /// Removes the planet and, with it, every resident.
    async fn delete(&self, id: i32) -> Result<(), CatalogError>;
}
