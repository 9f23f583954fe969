use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub director: Option<String>,
    /// Free-form text, e.g. "1977-05-25".
    pub release_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_films::Entity")]
    PeopleFilms,
    #[sea_orm(has_many = "super::planet_films::Entity")]
    PlanetFilms,
}

impl Related<super::people_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFilms.def()
    }
}

impl Related<super::planet_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFilms.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        super::people_films::Relation::People.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::people_films::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_films::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_films::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
