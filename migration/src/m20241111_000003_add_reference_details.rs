use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite accepts a single column change per ALTER TABLE.
        for table in ReferenceTable::ALL {
            manager
                .alter_table(
                    Table::alter()
                        .table(table)
                        .add_column(text_null(Details::Description))
                        .to_owned(),
                )
                .await?;
            manager
                .alter_table(
                    Table::alter().table(table).add_column(string_null(Details::Poster)).to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ReferenceTable::ALL {
            manager
                .alter_table(Table::alter().table(table).drop_column(Details::Poster).to_owned())
                .await?;
            manager
                .alter_table(
                    Table::alter().table(table).drop_column(Details::Description).to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum ReferenceTable {
    Genre,
    Star,
    Director,
    Certification,
}

impl ReferenceTable {
    const ALL: [Self; 4] = [Self::Genre, Self::Star, Self::Director, Self::Certification];
}

#[derive(DeriveIden)]
enum Details {
    Description,
    Poster,
}
