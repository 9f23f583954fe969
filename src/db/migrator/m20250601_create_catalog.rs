use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Planet::Name)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Planet::Climate).string_len(50).null())
                    .col(ColumnDef::new(Planet::Terrain).string_len(50).null())
                    .col(ColumnDef::new(Planet::Population).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(120).not_null())
                    .col(ColumnDef::new(People::Height).string_len(10).null())
                    .col(ColumnDef::new(People::Mass).string_len(10).null())
                    .col(ColumnDef::new(People::Gender).string_len(10).null())
                    .col(ColumnDef::new(People::PlanetId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_planet_id")
                            .from(People::Table, People::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_people_planet_id")
                    .table(People::Table)
                    .col(People::PlanetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Film::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Film::Title)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Film::Director).string_len(120).null())
                    .col(ColumnDef::new(Film::ReleaseDate).string_len(20).null())
                    .to_owned(),
            )
            .await?;

        // Join tables hold only the two keys; removing either side drops the link.
        manager
            .create_table(
                Table::create()
                    .table(PeopleFilms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PeopleFilms::PeopleId).integer().not_null())
                    .col(ColumnDef::new(PeopleFilms::FilmId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_people_films")
                            .col(PeopleFilms::PeopleId)
                            .col(PeopleFilms::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_films_people_id")
                            .from(PeopleFilms::Table, PeopleFilms::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_films_film_id")
                            .from(PeopleFilms::Table, PeopleFilms::FilmId)
                            .to(Film::Table, Film::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanetFilms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PlanetFilms::PlanetId).integer().not_null())
                    .col(ColumnDef::new(PlanetFilms::FilmId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_planet_films")
                            .col(PlanetFilms::PlanetId)
                            .col(PlanetFilms::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_films_planet_id")
                            .from(PlanetFilms::Table, PlanetFilms::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_films_film_id")
                            .from(PlanetFilms::Table, PlanetFilms::FilmId)
                            .to(Film::Table, Film::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanetFilms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PeopleFilms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Population,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    Gender,
    PlanetId,
}

#[derive(DeriveIden)]
enum Film {
    Table,
    Id,
    Title,
    Director,
    ReleaseDate,
}

#[derive(DeriveIden)]
enum PeopleFilms {
    Table,
    PeopleId,
    FilmId,
}

#[derive(DeriveIden)]
enum PlanetFilms {
    Table,
    PlanetId,
    FilmId,
}
