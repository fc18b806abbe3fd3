use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::debug;

use crate::{
    entities::{
        certification, director, genre, movie, movie_director, movie_genre, movie_star, star,
    },
    error::AppResult,
    models::CleanReport,
};

/// Deletes every movie, association and reference row in one transaction.
/// Links go first, then movies, so the certification foreign key never blocks.
pub async fn clean(db: &DatabaseConnection) -> AppResult<CleanReport> {
    let txn = db.begin().await?;

    let report = CleanReport {
        genre_links: movie_genre::Entity::delete_many().exec(&txn).await?.rows_affected,
        director_links: movie_director::Entity::delete_many().exec(&txn).await?.rows_affected,
        star_links: movie_star::Entity::delete_many().exec(&txn).await?.rows_affected,
        movies: movie::Entity::delete_many().exec(&txn).await?.rows_affected,
        certifications: certification::Entity::delete_many().exec(&txn).await?.rows_affected,
        genres: genre::Entity::delete_many().exec(&txn).await?.rows_affected,
        directors: director::Entity::delete_many().exec(&txn).await?.rows_affected,
        stars: star::Entity::delete_many().exec(&txn).await?.rows_affected,
    };

    txn.commit().await?;

    debug!(?report, "cleaned movie tables");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use sea_orm::{ColumnTrait, QueryFilter};

    use super::*;
    use crate::{
        db::connect_and_migrate,
        error::AppError,
        importer::{
            MovieImporter,
            tests::{dataset, table_counts},
        },
        pricing::FixedPrice,
    };

    #[tokio::test]
    async fn clean_after_import_leaves_no_rows() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        MovieImporter::new(FixedPrice(None)).import(&db, &dataset()).await.unwrap();

        let report = clean(&db).await.unwrap();

        assert_eq!(report.movies, 3);
        assert_eq!(report.certifications, 2);
        assert_eq!(report.genre_links, 6);
        assert_eq!(report.total(), 3 + 2 + 4 + 2 + 4 + 6 + 3 + 5);
        assert_eq!(table_counts(&db).await, [0; 8]);
    }

    #[tokio::test]
    async fn clean_on_empty_store_is_a_no_op() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let report = clean(&db).await.unwrap();

        assert_eq!(report, CleanReport::default());
    }

    #[tokio::test]
    async fn import_succeeds_again_after_clean() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let mut importer = MovieImporter::new(FixedPrice(None));
        importer.import(&db, &dataset()).await.unwrap();

        clean(&db).await.unwrap();

        let report = importer.import(&db, &dataset()).await.unwrap();
        assert_eq!(report.movies, 3);
        assert_eq!(report.genres_created, 4);
    }

    #[tokio::test]
    async fn referenced_certification_cannot_be_deleted_alone() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        MovieImporter::new(FixedPrice(None)).import(&db, &dataset()).await.unwrap();

        let before = table_counts(&db).await;

        let err = certification::Entity::delete_many().exec(&db).await.unwrap_err();

        let err = AppError::from(err);
        assert!(matches!(err, AppError::Constraint(ref msg) if msg.contains("FOREIGN KEY")), "got {err:?}");
        assert_eq!(table_counts(&db).await, before);
    }

    #[tokio::test]
    async fn certification_is_deletable_once_unreferenced() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        MovieImporter::new(FixedPrice(None)).import(&db, &dataset()).await.unwrap();
        let rated_r = certification::Entity::find()
            .filter(certification::Column::Name.eq("R"))
            .one(&db)
            .await
            .unwrap()
            .unwrap();

        let err = certification::Entity::delete_by_id(rated_r.id).exec(&db).await.unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Constraint(_)));

        movie::Entity::delete_many()
            .filter(movie::Column::CertificationId.eq(rated_r.id))
            .exec(&db)
            .await
            .unwrap();
        let deleted = certification::Entity::delete_by_id(rated_r.id).exec(&db).await.unwrap();

        assert_eq!(deleted.rows_affected, 1);
        assert_eq!(table_counts(&db).await[..2], [2, 1]);
    }
}
