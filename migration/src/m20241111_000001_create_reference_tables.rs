use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(reference_table(Genre::Table, Genre::Id, Genre::Name, Genre::Slug))
            .await?;
        manager
            .create_table(reference_table(Star::Table, Star::Id, Star::Name, Star::Slug))
            .await?;
        manager
            .create_table(reference_table(
                Director::Table,
                Director::Id,
                Director::Name,
                Director::Slug,
            ))
            .await?;
        manager
            .create_table(reference_table(
                Certification::Table,
                Certification::Id,
                Certification::Name,
                Certification::Slug,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Certification::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Director::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Star::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        Ok(())
    }
}

fn reference_table<T>(table: T, id: T, name: T, slug: T) -> TableCreateStatement
where
    T: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(id))
        .col(string_len(name, 100).unique_key())
        .col(string_len(slug, 100))
        .to_owned()
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(DeriveIden)]
enum Star {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(DeriveIden)]
enum Director {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(DeriveIden)]
enum Certification {
    Table,
    Id,
    Name,
    Slug,
}
