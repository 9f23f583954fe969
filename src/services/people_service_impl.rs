//! `SeaORM` implementation of the `PeopleService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::api::types::PeopleDto;
use crate::db::Store;
use crate::domain::{CatalogError, EntityKind, non_blank, required_text};
use crate::models::{NewPerson, PersonChanges};
use crate::services::people_service::{CreatePersonRequest, PeopleService};

pub struct SeaOrmPeopleService {
    store: Store,
}

impl SeaOrmPeopleService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PeopleService for SeaOrmPeopleService {
    async fn list(&self) -> Result<Vec<PeopleDto>, CatalogError> {
        let people = self.store.people().list().await?;
        Ok(people.into_iter().map(PeopleDto::from).collect())
    }

    async fn get(&self, id: i32) -> Result<PeopleDto, CatalogError> {
        self.store
            .people()
            .get(id)
            .await?
            .map(PeopleDto::from)
            .ok_or(CatalogError::not_found(EntityKind::People, id))
    }

    async fn create(&self, request: CreatePersonRequest) -> Result<PeopleDto, CatalogError> {
        let new = NewPerson {
            name: required_text("name", request.name)?,
            height: request.height,
            mass: request.mass,
            gender: request.gender,
            planet_id: request.homeworld,
        };

        let record = self.store.people().create(new).await?;
        info!(
            people_id = record.person.id,
            homeworld = ?record.person.planet_id,
            "Person created"
        );

        Ok(PeopleDto::from(record))
    }

    async fn update(&self, id: i32, mut changes: PersonChanges) -> Result<PeopleDto, CatalogError> {
        changes.name = non_blank("name", changes.name)?;

        self.store
            .people()
            .update(id, changes)
            .await?
            .map(PeopleDto::from)
            .ok_or(CatalogError::not_found(EntityKind::People, id))
    }

    async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        if self.store.people().delete(id).await? {
            info!(people_id = id, "Person deleted");
            Ok(())
        } else {
            Err(CatalogError::not_found(EntityKind::People, id))
        }
    }
}
