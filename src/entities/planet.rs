use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people::Entity")]
    Residents,
    #[sea_orm(has_many = "super::planet_films::Entity")]
    PlanetFilms,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Residents.def()
    }
}

impl Related<super::planet_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFilms.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_films::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_films::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
