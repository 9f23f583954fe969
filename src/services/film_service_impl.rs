//! `SeaORM` implementation of the `FilmService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::api::types::FilmDto;
use crate::db::Store;
use crate::domain::{CatalogError, EntityKind, non_blank, required_text};
use crate::models::{FilmChanges, NewFilm};
use crate::services::film_service::{CreateFilmRequest, FilmService};

pub struct SeaOrmFilmService {
    store: Store,
}

impl SeaOrmFilmService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FilmService for SeaOrmFilmService {
    async fn list(&self) -> Result<Vec<FilmDto>, CatalogError> {
        let films = self.store.films().list().await?;
        Ok(films.into_iter().map(FilmDto::from).collect())
    }

    async fn get(&self, id: i32) -> Result<FilmDto, CatalogError> {
        self.store
            .films()
            .get(id)
            .await?
            .map(FilmDto::from)
            .ok_or(CatalogError::not_found(EntityKind::Film, id))
    }

    async fn create(&self, request: CreateFilmRequest) -> Result<FilmDto, CatalogError> {
        let new = NewFilm {
            title: required_text("title", request.title)?,
            director: request.director,
            release_date: request.release_date,
            characters: request.characters.unwrap_or_default(),
            planets: request.planets.unwrap_or_default(),
        };

        let record = self.store.films().create(new).await?;
        info!(
            film_id = record.film.id,
            title = %record.film.title,
            characters = record.characters.len(),
            planets = record.planets.len(),
            "Film created"
        );

        Ok(FilmDto::from(record))
    }

    async fn update(&self, id: i32, mut changes: FilmChanges) -> Result<FilmDto, CatalogError> {
        changes.title = non_blank("title", changes.title)?;

        self.store
            .films()
            .update(id, changes)
            .await?
            .map(FilmDto::from)
            .ok_or(CatalogError::not_found(EntityKind::Film, id))
    }

    async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        if self.store.films().delete(id).await? {
            info!(film_id = id, "Film deleted");
            Ok(())
        } else {
            Err(CatalogError::not_found(EntityKind::Film, id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPerson, NewPlanet};

    struct Fixture {
        store: Store,
        service: SeaOrmFilmService,
        tatooine: i32,
        hoth: i32,
        luke: i32,
        leia: i32,
    }

    async fn fixture() -> Fixture {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();

        let mut planet_ids = Vec::new();
        for name in ["Tatooine", "Hoth"] {
            let planet = store
                .planets()
                .create(NewPlanet {
                    name: name.to_string(),
                    climate: None,
                    terrain: None,
                    population: None,
                })
                .await
                .unwrap();
            planet_ids.push(planet.planet.id);
        }

        let mut people_ids = Vec::new();
        for name in ["Luke Skywalker", "Leia Organa"] {
            let person = store
                .people()
                .create(NewPerson {
                    name: name.to_string(),
                    height: None,
                    mass: None,
                    gender: None,
                    planet_id: Some(planet_ids[0]),
                })
                .await
                .unwrap();
            people_ids.push(person.person.id);
        }

        Fixture {
            service: SeaOrmFilmService::new(store.clone()),
            store,
            tatooine: planet_ids[0],
            hoth: planet_ids[1],
            luke: people_ids[0],
            leia: people_ids[1],
        }
    }

    fn new_hope(characters: Vec<i32>, planets: Vec<i32>) -> CreateFilmRequest {
        CreateFilmRequest {
            title: Some("A New Hope".to_string()),
            director: Some("George Lucas".to_string()),
            release_date: Some("1977-05-25".to_string()),
            characters: Some(characters),
            planets: Some(planets),
        }
    }

    #[tokio::test]
    async fn test_create_links_both_sides() {
        let f = fixture().await;

        let film = f
            .service
            .create(new_hope(vec![f.leia, f.luke], vec![f.tatooine]))
            .await
            .unwrap();

        assert_eq!(film.characters, vec![f.luke, f.leia]);
        assert_eq!(film.planets, vec![f.tatooine]);

        let luke = f.store.people().get(f.luke).await.unwrap().unwrap();
        assert_eq!(luke.films, vec![film.id]);
        let tatooine = f.store.planets().get(f.tatooine).await.unwrap().unwrap();
        assert_eq!(tatooine.films, vec![film.id]);
    }

    #[tokio::test]
    async fn test_duplicate_title_conflicts() {
        let f = fixture().await;

        f.service.create(new_hope(vec![], vec![])).await.unwrap();
        let err = f
            .service
            .create(new_hope(vec![f.luke], vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Conflict(_)));
        assert_eq!(f.service.list().await.unwrap().len(), 1);
        let luke = f.store.people().get(f.luke).await.unwrap().unwrap();
        assert!(luke.films.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_unknown_character_fails() {
        let f = fixture().await;

        let err = f
            .service
            .create(new_hope(vec![f.luke, 999], vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(ref msg) if msg.contains("999")));
        assert!(f.service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_present_lists_only() {
        let f = fixture().await;
        let film = f
            .service
            .create(new_hope(vec![f.luke], vec![f.tatooine]))
            .await
            .unwrap();

        let changes: FilmChanges =
            serde_json::from_str(&format!(r#"{{"planets": [{}]}}"#, f.hoth)).unwrap();
        let updated = f.service.update(film.id, changes).await.unwrap();

        assert_eq!(updated.title, "A New Hope");
        assert_eq!(updated.characters, vec![f.luke]);
        assert_eq!(updated.planets, vec![f.hoth]);

        let changes: FilmChanges = serde_json::from_str(r#"{"characters": []}"#).unwrap();
        let updated = f.service.update(film.id, changes).await.unwrap();
        assert!(updated.characters.is_empty());
        assert_eq!(updated.planets, vec![f.hoth]);
    }

    #[tokio::test]
    async fn test_delete_keeps_people_and_planets() {
        let f = fixture().await;
        let film = f
            .service
            .create(new_hope(vec![f.luke, f.leia], vec![f.tatooine, f.hoth]))
            .await
            .unwrap();

        f.service.delete(film.id).await.unwrap();

        assert!(matches!(
            f.service.get(film.id).await,
            Err(CatalogError::NotFound { .. })
        ));
        assert_eq!(f.store.people().list().await.unwrap().len(), 2);
        let hoth = f.store.planets().get(f.hoth).await.unwrap().unwrap();
        assert!(hoth.films.is_empty());
    }
}
