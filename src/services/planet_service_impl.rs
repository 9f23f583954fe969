//! `SeaORM` implementation of the `PlanetService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::api::types::PlanetDto;
use crate::db::Store;
use crate::domain::{CatalogError, EntityKind, non_blank, required_text};
use crate::models::{NewPlanet, PlanetChanges};
use crate::services::planet_service::{CreatePlanetRequest, PlanetService};

pub struct SeaOrmPlanetService {
    store: Store,
}

impl SeaOrmPlanetService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlanetService for SeaOrmPlanetService {
    async fn list(&self) -> Result<Vec<PlanetDto>, CatalogError> {
        let planets = self.store.planets().list().await?;
        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    async fn get(&self, id: i32) -> Result<PlanetDto, CatalogError> {
        self.store
            .planets()
            .get(id)
            .await?
            .map(PlanetDto::from)
            .ok_or(CatalogError::not_found(EntityKind::Planet, id))
    }

    async fn create(&self, request: CreatePlanetRequest) -> Result<PlanetDto, CatalogError> {
        let new = NewPlanet {
            name: required_text("name", request.name)?,
            climate: request.climate,
            terrain: request.terrain,
            population: request.population,
        };

        let record = self.store.planets().create(new).await?;
        info!(planet_id = record.planet.id, name = %record.planet.name, "Planet created");

        Ok(PlanetDto::from(record))
    }

    async fn update(&self, id: i32, mut changes: PlanetChanges) -> Result<PlanetDto, CatalogError> {
        changes.name = non_blank("name", changes.name)?;

        self.store
            .planets()
            .update(id, changes)
            .await?
            .map(PlanetDto::from)
            .ok_or(CatalogError::not_found(EntityKind::Planet, id))
    }

    async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        if self.store.planets().delete(id).await? {
            info!(planet_id = id, "Planet deleted");
            Ok(())
        } else {
            Err(CatalogError::not_found(EntityKind::Planet, id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPerson;

    async fn service() -> (Store, SeaOrmPlanetService) {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        (store.clone(), SeaOrmPlanetService::new(store))
    }

    fn tatooine() -> CreatePlanetRequest {
        CreatePlanetRequest {
            name: Some("Tatooine".to_string()),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            population: Some("200000".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let (_, service) = service().await;

        let err = service
            .create(CreatePlanetRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts_without_side_effects() {
        let (_, service) = service().await;

        let first = service.create(tatooine()).await.unwrap();
        let err = service.create(tatooine()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Conflict(_)));
        assert_eq!(service.list().await.unwrap(), vec![first]);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let (_, service) = service().await;
        let planet = service.create(tatooine()).await.unwrap();

        let changes: PlanetChanges = serde_json::from_str(r#"{"climate": "hot"}"#).unwrap();
        let updated = service.update(planet.id, changes).await.unwrap();

        assert_eq!(updated.name, "Tatooine");
        assert_eq!(updated.climate.as_deref(), Some("hot"));
        assert_eq!(updated.terrain.as_deref(), Some("desert"));
        assert_eq!(updated.population.as_deref(), Some("200000"));
    }

    #[tokio::test]
    async fn test_update_null_clears_nullable_field() {
        let (_, service) = service().await;
        let planet = service.create(tatooine()).await.unwrap();

        let changes: PlanetChanges = serde_json::from_str(r#"{"terrain": null}"#).unwrap();
        let updated = service.update(planet.id, changes).await.unwrap();

        assert_eq!(updated.terrain, None);
        assert_eq!(updated.climate.as_deref(), Some("arid"));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name_and_missing_id() {
        let (_, service) = service().await;
        let planet = service.create(tatooine()).await.unwrap();

        let blank = PlanetChanges {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(planet.id, blank).await,
            Err(CatalogError::Validation(_))
        ));

        assert!(matches!(
            service.update(999, PlanetChanges::default()).await,
            Err(CatalogError::NotFound { id: 999, .. })
        ));
    }

    #[tokio::test]
    async fn test_rename_onto_existing_name_conflicts() {
        let (_, service) = service().await;
        service.create(tatooine()).await.unwrap();
        let hoth = service
            .create(CreatePlanetRequest {
                name: Some("Hoth".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let changes = PlanetChanges {
            name: Some("Tatooine".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(hoth.id, changes).await,
            Err(CatalogError::Conflict(_))
        ));
        assert_eq!(service.get(hoth.id).await.unwrap().name, "Hoth");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_residents() {
        let (store, service) = service().await;
        let tatooine = service.create(tatooine()).await.unwrap();
        let naboo = service
            .create(CreatePlanetRequest {
                name: Some("Naboo".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        for (name, planet_id) in [
            ("Luke Skywalker", tatooine.id),
            ("Owen Lars", tatooine.id),
            ("Padmé Amidala", naboo.id),
        ] {
            store
                .people()
                .create(NewPerson {
                    name: name.to_string(),
                    height: None,
                    mass: None,
                    gender: None,
                    planet_id: Some(planet_id),
                })
                .await
                .unwrap();
        }

        assert_eq!(service.get(tatooine.id).await.unwrap().residents.len(), 2);

        service.delete(tatooine.id).await.unwrap();

        let remaining = store.people().list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].person.planet_id, Some(naboo.id));
        assert!(matches!(
            service.get(tatooine.id).await,
            Err(CatalogError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(tatooine.id).await,
            Err(CatalogError::NotFound { .. })
        ));
    }
}
