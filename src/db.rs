use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    if database_url.contains(":memory:") {
        // every pooled connection would otherwise open its own empty database
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;

    for pragma in ["PRAGMA foreign_keys=ON", "PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"]
    {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;
    use crate::entities::{certification, movie, movie_genre};

    #[tokio::test]
    async fn migrations_create_empty_schema() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        assert_eq!(movie::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(certification::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(movie_genre::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
    }
}
