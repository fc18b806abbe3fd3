use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, SqlErr,
    TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::{
    entities::{
        certification, director, genre, movie, movie_director, movie_genre, movie_star, star,
    },
    error::{AppError, AppResult},
    models::{ImportReport, MovieRecord},
    pricing::PricePolicy,
    resolver::Resolver,
    slug::unique_slug,
};

/// Loads mapped records into the store as one all-or-nothing transaction.
pub struct MovieImporter<P> {
    price_policy: P,
}

impl<P: PricePolicy> MovieImporter<P> {
    pub fn new(price_policy: P) -> Self {
        Self { price_policy }
    }

    /// Imports every record or nothing: the first failure rolls back all rows
    /// written by this call.
    pub async fn import(
        &mut self,
        db: &DatabaseConnection,
        records: &[MovieRecord],
    ) -> AppResult<ImportReport> {
        let txn = db.begin().await?;

        match self.import_all(&txn, records).await {
            Ok(report) => {
                txn.commit().await?;
                Ok(report)
            },
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            },
        }
    }

    async fn import_all(
        &mut self,
        txn: &DatabaseTransaction,
        records: &[MovieRecord],
    ) -> AppResult<ImportReport> {
        let mut certifications = Resolver::<certification::Entity>::new();
        let mut genres = Resolver::<genre::Entity>::new();
        let mut directors = Resolver::<director::Entity>::new();
        let mut stars = Resolver::<star::Entity>::new();
        let mut report = ImportReport::default();

        let added_date = jiff::Zoned::now().date().to_string();
        let total = records.len();

        for (index, record) in records.iter().enumerate() {
            require(record, "name", &record.name)?;
            require(record, "certification", &record.certification)?;

            let certification_id = certifications.resolve(txn, &record.certification).await?;
            let movie_id = self.insert_movie(txn, record, certification_id).await?;

            for name in &record.genres {
                let genre_id = genres.resolve(txn, name).await?;
                let link = movie_genre::ActiveModel {
                    movie_id: Set(movie_id),
                    genre_id: Set(genre_id),
                    added_date: Set(added_date.clone()),
                    ..Default::default()
                };
                movie_genre::Entity::insert(link).exec(txn).await?;
                report.genre_links += 1;
            }

            for name in &record.directors {
                let director_id = directors.resolve(txn, name).await?;
                let link = movie_director::ActiveModel {
                    movie_id: Set(movie_id),
                    director_id: Set(director_id),
                    ..Default::default()
                };
                movie_director::Entity::insert(link).exec(txn).await?;
                report.director_links += 1;
            }

            for name in &record.stars {
                let star_id = stars.resolve(txn, name).await?;
                let link = movie_star::ActiveModel {
                    movie_id: Set(movie_id),
                    star_id: Set(star_id),
                    ..Default::default()
                };
                movie_star::Entity::insert(link).exec(txn).await?;
                report.star_links += 1;
            }

            report.movies += 1;
            info!(progress = index + 1, total, movie = %record.name, "populating db");
        }

        report.certifications_created = certifications.created();
        report.genres_created = genres.created();
        report.directors_created = directors.created();
        report.stars_created = stars.created();
        Ok(report)
    }

    async fn insert_movie(
        &mut self,
        txn: &DatabaseTransaction,
        record: &MovieRecord,
        certification_id: i32,
    ) -> AppResult<i32> {
        let (slug, _) =
            unique_slug::<movie::Entity, _>(txn, movie::Column::Slug, &record.name).await?;

        let model = movie::ActiveModel {
            name: Set(record.name.clone()),
            slug: Set(slug),
            year: Set(record.year),
            runtime: Set(record.runtime),
            rating: Set(record.rating),
            votes: Set(record.votes),
            meta_score: Set(record.meta_score),
            gross: Set(record.gross),
            description: Set(record.description.clone()),
            price: Set(self.price_policy.price(record)),
            certification_id: Set(certification_id),
            ..Default::default()
        };

        match model.insert(txn).await {
            Ok(movie) => {
                debug!(id = movie.id, name = %movie.name, price = ?movie.price, "inserted movie");
                Ok(movie.id)
            },
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateMovie {
                    name: record.name.clone(),
                    year: record.year,
                    runtime: record.runtime,
                })
            },
            Err(err) => Err(err.into()),
        }
    }
}

fn require(record: &MovieRecord, field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::MissingField { movie: record.name.clone(), field });
    }
    Ok(())
}
