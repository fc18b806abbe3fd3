use std::path::PathBuf;

use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot open dataset {}: {source}", .path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed CSV row. `line` is 1-based and counts the header.
    #[error("malformed dataset row at line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("movie {movie:?} has no {field}")]
    MissingField { movie: String, field: &'static str },

    #[error("movie {name:?} ({year}, {runtime} min) already exists")]
    DuplicateMovie { name: String, year: i32, runtime: i32 },

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Db(#[source] DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => match err {
                // raised by ActiveModelBehavior validation hooks
                DbErr::Custom(msg) => Self::Constraint(msg),
                other => match sqlite_constraint(&other) {
                    Some(msg) => Self::Constraint(msg),
                    None => Self::Db(other),
                },
            },
        }
    }
}

/// Primary result code shared by every `SQLITE_CONSTRAINT_*` extended code.
const SQLITE_CONSTRAINT: i32 = 19;

/// Catches constraint codes `sql_err()` leaves unclassified, such as
/// `SQLITE_CONSTRAINT_TRIGGER` (1811) raised by a blocked `ON DELETE RESTRICT`.
fn sqlite_constraint(err: &DbErr) -> Option<String> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))) = err
    else {
        return None;
    };
    let code: i32 = db_err.code()?.parse().ok()?;
    (code & 0xff == SQLITE_CONSTRAINT).then(|| db_err.message().to_string())
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or_default();
        Self::Parse { line, source: err }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_db_errors_are_constraint_violations() {
        let err = AppError::from(DbErr::Custom("year 1700 is outside 1888..=2028".to_string()));
        assert!(matches!(err, AppError::Constraint(msg) if msg.contains("year 1700")));
    }

    #[tokio::test]
    async fn restricted_delete_is_a_constraint_violation() {
        use sea_orm::{ActiveModelTrait, EntityTrait, Set};

        use crate::{
            db::connect_and_migrate,
            entities::{certification, movie},
        };

        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let rated_r = certification::ActiveModel {
            name: Set("R".to_string()),
            slug: Set("r".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        movie::ActiveModel {
            name: Set("Heat".to_string()),
            slug: Set("heat".to_string()),
            year: Set(1995),
            runtime: Set(170),
            rating: Set(8.3),
            votes: Set(690_000),
            description: Set("Thieves and a detective.".to_string()),
            certification_id: Set(rated_r.id),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let err = certification::Entity::delete_by_id(rated_r.id).exec(&db).await.unwrap_err();
        assert!(sqlite_constraint(&err).is_some(), "unclassified: {err:?}");
        assert!(
            matches!(AppError::from(err), AppError::Constraint(ref msg) if msg.contains("FOREIGN KEY"))
        );
    }

    #[test]
    fn other_db_errors_pass_through() {
        let err = AppError::from(DbErr::RecordNotInserted);
        assert!(matches!(err, AppError::Db(DbErr::RecordNotInserted)));
    }
}
