//! Domain service for people.

use serde::Deserialize;

use crate::api::types::PeopleDto;
use crate::domain::CatalogError;
use crate::models::PersonChanges;

/// Body of `POST /peoples`. `homeworld` is an optional planet id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<i32>,
}

#[async_trait::async_trait]
pub trait PeopleService: Send + Sync {
    async fn list(&self) -> Result<Vec<PeopleDto>, CatalogError>;

    async fn get(&self, id: i32) -> Result<PeopleDto, CatalogError>;

    /// An unknown homeworld id is rejected with [`CatalogError::Validation`].
    async fn create(&self, request: CreatePersonRequest) -> Result<PeopleDto, CatalogError>;

    /// Sets the person's own homeworld reference when `homeworld` is present.
    async fn update(&self, id: i32, changes: PersonChanges) -> Result<PeopleDto, CatalogError>;

    async fn delete(&self, id: i32) -> Result<(), CatalogError>;
}
