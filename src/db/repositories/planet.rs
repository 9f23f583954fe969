use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use super::sorted_ids;
use crate::domain::CatalogError;
use crate::entities::{people, people_films, planet, planet_films, prelude::*};
use crate::models::{NewPlanet, PlanetChanges, PlanetRecord};

pub struct PlanetRepository {
    conn: DatabaseConnection,
}

impl PlanetRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<PlanetRecord>, CatalogError> {
        let planets = Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(hydrate(&self.conn, planets).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<PlanetRecord>, CatalogError> {
        let Some(planet) = Planet::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        Ok(hydrate(&self.conn, vec![planet]).await?.pop())
    }

    pub async fn create(&self, new: NewPlanet) -> Result<PlanetRecord, CatalogError> {
        let txn = self.conn.begin().await?;

        let name = new.name.clone();
        let planet = planet::ActiveModel {
            name: Set(new.name),
            climate: Set(new.climate),
            terrain: Set(new.terrain),
            population: Set(new.population),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CatalogError::from_write(e, || format!("Planet '{name}' already exists")))?;

        txn.commit().await?;

        Ok(PlanetRecord {
            planet,
            residents: Vec::new(),
            films: Vec::new(),
        })
    }

    /// Applies `changes` to the planet. `Ok(None)` when the id does not resolve.
    pub async fn update(
        &self,
        id: i32,
        changes: PlanetChanges,
    ) -> Result<Option<PlanetRecord>, CatalogError> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Planet::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: planet::ActiveModel = existing.clone().into();
        let new_name = changes.name.clone();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(climate) = changes.climate.into_update() {
            active.climate = Set(climate);
        }
        if let Some(terrain) = changes.terrain.into_update() {
            active.terrain = Set(terrain);
        }
        if let Some(population) = changes.population.into_update() {
            active.population = Set(population);
        }

        let planet = if active.is_changed() {
            active.update(&txn).await.map_err(|e| {
                CatalogError::from_write(e, || {
                    format!("Planet '{}' already exists", new_name.unwrap_or_default())
                })
            })?
        } else {
            existing
        };

        let record = hydrate(&txn, vec![planet]).await?.pop();
        txn.commit().await?;

        Ok(record)
    }

    /// Deletes the planet, its residents, and every film link of either.
    ///
    /// Returns `false` when the id does not resolve.
    pub async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let txn = self.conn.begin().await?;

        if Planet::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        let resident_ids: Vec<i32> = People::find()
            .filter(people::Column::PlanetId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|person| person.id)
            .collect();

        if !resident_ids.is_empty() {
            PeopleFilms::delete_many()
                .filter(people_films::Column::PeopleId.is_in(resident_ids.clone()))
                .exec(&txn)
                .await?;

            People::delete_many()
                .filter(people::Column::Id.is_in(resident_ids.clone()))
                .exec(&txn)
                .await?;
        }

        PlanetFilms::delete_many()
            .filter(planet_films::Column::PlanetId.eq(id))
            .exec(&txn)
            .await?;

        Planet::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        debug!(
            planet_id = id,
            residents = resident_ids.len(),
            "Deleted planet and its residents"
        );
        Ok(true)
    }
}

async fn hydrate<C>(db: &C, planets: Vec<planet::Model>) -> Result<Vec<PlanetRecord>, sea_orm::DbErr>
where
    C: ConnectionTrait,
{
    let residents = planets.load_many(People, db).await?;
    let films = planets.load_many(PlanetFilms, db).await?;

    Ok(planets
        .into_iter()
        .zip(residents)
        .zip(films)
        .map(|((planet, residents), films)| PlanetRecord {
            planet,
            residents: sorted_ids(residents.into_iter().map(|person| person.id)),
            films: sorted_ids(films.into_iter().map(|link| link.film_id)),
        })
        .collect())
}
