use std::fmt::Display;

use sea_orm::{ActiveValue, ConnectionTrait, entity::prelude::*, sea_query::Value};

pub const NAME_MAX_LEN: usize = 250;
pub const MIN_YEAR: i32 = 1888;
pub const MAX_RUNTIME: i32 = 600;
pub const MAX_VOTES: i32 = 10_000_000;
pub const MAX_GROSS: f64 = 1_000_000_000.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub year: i32,
    pub runtime: i32,
    pub rating: f64,
    pub votes: i32,
    pub meta_score: Option<f64>,
    pub gross: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: Option<Decimal>,
    pub certification_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::certification::Entity",
        from = "Column::CertificationId",
        to = "super::certification::Column::Id",
        on_delete = "Restrict"
    )]
    Certification,
    #[sea_orm(has_many = "super::movie_genre::Entity")]
    MovieGenre,
    #[sea_orm(has_many = "super::movie_director::Entity")]
    MovieDirector,
    #[sea_orm(has_many = "super::movie_star::Entity")]
    MovieStar,
}

impl Related<super::certification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certification.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_genre::Relation::Movie.def().rev())
    }
}

impl Related<super::director::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_director::Relation::Director.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_director::Relation::Movie.def().rev())
    }
}

impl Related<super::star::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_star::Relation::Star.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_star::Relation::Movie.def().rev())
    }
}

/// Field range checks run on every save, mirroring the column validators of
/// the schema. A violation aborts the surrounding transaction.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.validate()?;
        Ok(self)
    }
}

impl ActiveModel {
    fn validate(&self) -> Result<(), DbErr> {
        let max_year = i32::from(jiff::Zoned::now().year()) + 2;

        if let Some(name) = current(&self.name) {
            super::check_len("name", name, NAME_MAX_LEN)?;
        }
        if let Some(&year) = current(&self.year) {
            check_range("year", year, MIN_YEAR, max_year)?;
        }
        if let Some(&runtime) = current(&self.runtime) {
            check_range("runtime", runtime, 1, MAX_RUNTIME)?;
        }
        if let Some(&rating) = current(&self.rating) {
            check_range("rating", rating, 0.0, 10.0)?;
        }
        if let Some(&votes) = current(&self.votes) {
            check_range("votes", votes, 0, MAX_VOTES)?;
        }
        if let Some(&Some(meta_score)) = current(&self.meta_score) {
            check_range("meta_score", meta_score, 0.0, 100.0)?;
        }
        if let Some(&Some(gross)) = current(&self.gross) {
            check_range("gross", gross, 0.0, MAX_GROSS)?;
        }
        if let Some(Some(price)) = current(&self.price) {
            // numeric(5, 2)
            if price.abs() >= Decimal::new(1000, 0) || price.round_dp(2) != *price {
                return Err(DbErr::Custom(format!(
                    "price {price} does not fit 5 digits with 2 decimal places"
                )));
            }
        }

        Ok(())
    }
}

fn current<V>(field: &ActiveValue<V>) -> Option<&V>
where
    V: Into<Value>,
{
    match field {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

fn check_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), DbErr>
where
    T: PartialOrd + Display,
{
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(DbErr::Custom(format!("{field} {value} is outside {min}..={max}")))
    }
}
