use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite has no fixed-point type, so money columns are REAL.
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_len(Movie::Name, 250))
                    .col(string_len(Movie::Slug, 100))
                    .col(integer(Movie::Year))
                    .col(integer(Movie::Runtime))
                    .col(double(Movie::Rating))
                    .col(integer(Movie::Votes))
                    .col(double_null(Movie::MetaScore))
                    .col(double_null(Movie::Gross))
                    .col(text(Movie::Description))
                    .col(double_null(Movie::Price))
                    .col(integer(Movie::CertificationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_certification")
                            .from(Movie::Table, Movie::CertificationId)
                            .to(Certification::Table, Certification::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_unique")
                    .table(Movie::Table)
                    .col(Movie::Name)
                    .col(Movie::Year)
                    .col(Movie::Runtime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieGenre::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieGenre::Id))
                    .col(integer(MovieGenre::MovieId))
                    .col(integer(MovieGenre::GenreId))
                    .col(integer_null(MovieGenre::ImportanceLevel))
                    .col(string(MovieGenre::AddedDate))
                    .col(text_null(MovieGenre::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_movie")
                            .from(MovieGenre::Table, MovieGenre::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_genre")
                            .from(MovieGenre::Table, MovieGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_genre_unique")
                    .table(MovieGenre::Table)
                    .col(MovieGenre::MovieId)
                    .col(MovieGenre::GenreId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieDirector::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieDirector::Id))
                    .col(integer(MovieDirector::MovieId))
                    .col(integer(MovieDirector::DirectorId))
                    .col(string_len_null(MovieDirector::Role, 20))
                    .col(integer_null(MovieDirector::CollaborationYears))
                    .col(text_null(MovieDirector::Comments))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_movie")
                            .from(MovieDirector::Table, MovieDirector::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_director")
                            .from(MovieDirector::Table, MovieDirector::DirectorId)
                            .to(Director::Table, Director::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_director_unique")
                    .table(MovieDirector::Table)
                    .col(MovieDirector::MovieId)
                    .col(MovieDirector::DirectorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieStar::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieStar::Id))
                    .col(integer(MovieStar::MovieId))
                    .col(integer(MovieStar::StarId))
                    .col(string_len_null(MovieStar::Role, 20))
                    .col(integer_null(MovieStar::ScreenTime))
                    .col(double_null(MovieStar::Salary))
                    .col(string_len_null(MovieStar::CharacterName, 100))
                    .col(boolean_null(MovieStar::Debut))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_star_movie")
                            .from(MovieStar::Table, MovieStar::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_star_star")
                            .from(MovieStar::Table, MovieStar::StarId)
                            .to(Star::Table, Star::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_star_unique")
                    .table(MovieStar::Table)
                    .col(MovieStar::MovieId)
                    .col(MovieStar::StarId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieStar::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieDirector::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieGenre::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Name,
    Slug,
    Year,
    Runtime,
    Rating,
    Votes,
    MetaScore,
    Gross,
    Description,
    Price,
    CertificationId,
}

#[derive(DeriveIden)]
enum MovieGenre {
    Table,
    Id,
    MovieId,
    GenreId,
    ImportanceLevel,
    AddedDate,
    Notes,
}

#[derive(DeriveIden)]
enum MovieDirector {
    Table,
    Id,
    MovieId,
    DirectorId,
    Role,
    CollaborationYears,
    Comments,
}

#[derive(DeriveIden)]
enum MovieStar {
    Table,
    Id,
    MovieId,
    StarId,
    Role,
    ScreenTime,
    Salary,
    CharacterName,
    Debut,
}

#[derive(DeriveIden)]
enum Certification {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Director {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Star {
    Table,
    Id,
}
