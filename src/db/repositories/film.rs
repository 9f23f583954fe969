use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{ensure_exist, sorted_ids};
use crate::domain::{CatalogError, EntityKind};
use crate::entities::{film, people, people_films, planet, planet_films, prelude::*};
use crate::models::{FilmChanges, FilmRecord, NewFilm};

pub struct FilmRepository {
    conn: DatabaseConnection,
}

impl FilmRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<FilmRecord>, CatalogError> {
        let films = Film::find()
            .order_by_asc(film::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(hydrate(&self.conn, films).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<FilmRecord>, CatalogError> {
        let Some(film) = Film::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        Ok(hydrate(&self.conn, vec![film]).await?.pop())
    }

    /// Inserts a film together with its character and planet links.
    pub async fn create(&self, new: NewFilm) -> Result<FilmRecord, CatalogError> {
        let txn = self.conn.begin().await?;

        ensure_exist::<People, _>(&txn, people::Column::Id, EntityKind::People, &new.characters)
            .await?;
        ensure_exist::<Planet, _>(&txn, planet::Column::Id, EntityKind::Planet, &new.planets)
            .await?;

        let title = new.title.clone();
        let film = film::ActiveModel {
            title: Set(new.title),
            director: Set(new.director),
            release_date: Set(new.release_date),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CatalogError::from_write(e, || format!("Film '{title}' already exists")))?;

        link_characters(&txn, film.id, &new.characters).await?;
        link_planets(&txn, film.id, &new.planets).await?;

        let record = hydrate(&txn, vec![film]).await?.pop();
        txn.commit().await?;

        record.ok_or_else(|| CatalogError::Internal("Failed to reload created film".to_string()))
    }

    /// Applies `changes` to the film. `Ok(None)` when the id does not resolve.
    pub async fn update(
        &self,
        id: i32,
        changes: FilmChanges,
    ) -> Result<Option<FilmRecord>, CatalogError> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Film::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(characters) = &changes.characters {
            ensure_exist::<People, _>(&txn, people::Column::Id, EntityKind::People, characters)
                .await?;
        }
        if let Some(planets) = &changes.planets {
            ensure_exist::<Planet, _>(&txn, planet::Column::Id, EntityKind::Planet, planets)
                .await?;
        }

        let mut active: film::ActiveModel = existing.clone().into();
        let new_title = changes.title.clone();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(director) = changes.director.into_update() {
            active.director = Set(director);
        }
        if let Some(release_date) = changes.release_date.into_update() {
            active.release_date = Set(release_date);
        }

        let film = if active.is_changed() {
            active.update(&txn).await.map_err(|e| {
                CatalogError::from_write(e, || {
                    format!("Film '{}' already exists", new_title.unwrap_or_default())
                })
            })?
        } else {
            existing
        };

        if let Some(characters) = changes.characters {
            PeopleFilms::delete_many()
                .filter(people_films::Column::FilmId.eq(id))
                .exec(&txn)
                .await?;
            link_characters(&txn, id, &characters).await?;
        }
        if let Some(planets) = changes.planets {
            PlanetFilms::delete_many()
                .filter(planet_films::Column::FilmId.eq(id))
                .exec(&txn)
                .await?;
            link_planets(&txn, id, &planets).await?;
        }

        let record = hydrate(&txn, vec![film]).await?.pop();
        txn.commit().await?;

        Ok(record)
    }

    /// Deletes the film and its links. Characters and planets stay.
    pub async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let txn = self.conn.begin().await?;

        if Film::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        PeopleFilms::delete_many()
            .filter(people_films::Column::FilmId.eq(id))
            .exec(&txn)
            .await?;
        PlanetFilms::delete_many()
            .filter(planet_films::Column::FilmId.eq(id))
            .exec(&txn)
            .await?;

        Film::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}

async fn link_characters(
    txn: &DatabaseTransaction,
    film_id: i32,
    people_ids: &[i32],
) -> Result<(), sea_orm::DbErr> {
    let links: Vec<people_films::ActiveModel> = sorted_ids(people_ids.iter().copied())
        .into_iter()
        .map(|people_id| people_films::ActiveModel {
            people_id: Set(people_id),
            film_id: Set(film_id),
        })
        .collect();

    if !links.is_empty() {
        PeopleFilms::insert_many(links).exec_without_returning(txn).await?;
    }
    Ok(())
}

async fn link_planets(
    txn: &DatabaseTransaction,
    film_id: i32,
    planet_ids: &[i32],
) -> Result<(), sea_orm::DbErr> {
    let links: Vec<planet_films::ActiveModel> = sorted_ids(planet_ids.iter().copied())
        .into_iter()
        .map(|planet_id| planet_films::ActiveModel {
            planet_id: Set(planet_id),
            film_id: Set(film_id),
        })
        .collect();

    if !links.is_empty() {
        PlanetFilms::insert_many(links).exec_without_returning(txn).await?;
    }
    Ok(())
}

async fn hydrate<C>(db: &C, films: Vec<film::Model>) -> Result<Vec<FilmRecord>, sea_orm::DbErr>
where
    C: ConnectionTrait,
{
    let characters = films.load_many(PeopleFilms, db).await?;
    let planets = films.load_many(PlanetFilms, db).await?;

    Ok(films
        .into_iter()
        .zip(characters)
        .zip(planets)
        .map(|((film, characters), planets)| FilmRecord {
            film,
            characters: sorted_ids(characters.into_iter().map(|link| link.people_id)),
            planets: sorted_ids(planets.into_iter().map(|link| link.planet_id)),
        })
        .collect())
}
