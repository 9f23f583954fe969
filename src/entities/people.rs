use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    /// Homeworld. Residents are removed together with their planet.
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Homeworld,
    #[sea_orm(has_many = "super::people_films::Entity")]
    PeopleFilms,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::people_films::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFilms.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::people_films::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::people_films::Relation::People.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
