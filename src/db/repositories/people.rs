use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{ensure_exist, sorted_ids};
use crate::domain::{CatalogError, EntityKind};
use crate::entities::{people, people_films, planet, prelude::*};
use crate::models::{NewPerson, PersonChanges, PersonRecord};

pub struct PeopleRepository {
    conn: DatabaseConnection,
}

impl PeopleRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<PersonRecord>, CatalogError> {
        let people = People::find()
            .order_by_asc(people::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(hydrate(&self.conn, people).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<PersonRecord>, CatalogError> {
        let Some(person) = People::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        Ok(hydrate(&self.conn, vec![person]).await?.pop())
    }

    /// Inserts a person. A homeworld that does not exist is a validation error.
    pub async fn create(&self, new: NewPerson) -> Result<PersonRecord, CatalogError> {
        let txn = self.conn.begin().await?;

        if let Some(planet_id) = new.planet_id {
            ensure_exist::<Planet, _>(&txn, planet::Column::Id, EntityKind::Planet, &[planet_id])
                .await?;
        }

        let person = people::ActiveModel {
            name: Set(new.name),
            height: Set(new.height),
            mass: Set(new.mass),
            gender: Set(new.gender),
            planet_id: Set(new.planet_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(PersonRecord {
            person,
            films: Vec::new(),
        })
    }

    /// Applies `changes` to the person. `Ok(None)` when the id does not resolve.
    pub async fn update(
        &self,
        id: i32,
        changes: PersonChanges,
    ) -> Result<Option<PersonRecord>, CatalogError> {
        let txn = self.conn.begin().await?;

        let Some(existing) = People::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(&planet_id) = changes.homeworld.as_set() {
            ensure_exist::<Planet, _>(&txn, planet::Column::Id, EntityKind::Planet, &[planet_id])
                .await?;
        }

        let mut active: people::ActiveModel = existing.clone().into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(height) = changes.height.into_update() {
            active.height = Set(height);
        }
        if let Some(mass) = changes.mass.into_update() {
            active.mass = Set(mass);
        }
        if let Some(gender) = changes.gender.into_update() {
            active.gender = Set(gender);
        }
        if let Some(planet_id) = changes.homeworld.into_update() {
            active.planet_id = Set(planet_id);
        }

        let person = if active.is_changed() {
            active.update(&txn).await?
        } else {
            existing
        };

        let record = hydrate(&txn, vec![person]).await?.pop();
        txn.commit().await?;

        Ok(record)
    }

    /// Deletes the person and their film links. The films themselves stay.
    pub async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let txn = self.conn.begin().await?;

        if People::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        PeopleFilms::delete_many()
            .filter(people_films::Column::PeopleId.eq(id))
            .exec(&txn)
            .await?;

        People::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}

async fn hydrate<C>(db: &C, people: Vec<people::Model>) -> Result<Vec<PersonRecord>, sea_orm::DbErr>
where
    C: ConnectionTrait,
{
    let films = people.load_many(PeopleFilms, db).await?;

    Ok(people
        .into_iter()
        .zip(films)
        .map(|(person, films)| PersonRecord {
            person,
            films: sorted_ids(films.into_iter().map(|link| link.film_id)),
        })
        .collect())
}
