use sea_orm::DbErr;

/// Width of the `name` column on reference tables.
pub const REFERENCE_NAME_MAX_LEN: usize = 100;

/// SQLite ignores `VARCHAR(n)`, so column widths are checked before saving.
fn check_len(field: &str, value: &str, max: usize) -> Result<(), DbErr> {
    let len = value.chars().count();
    if len > max {
        return Err(DbErr::Custom(format!("{field} is {len} characters long, at most {max} allowed")));
    }
    Ok(())
}

/// Save hook and [`NamedEntity`](crate::resolver::NamedEntity) impl shared by
/// the certification, genre, director and star tables.
macro_rules! reference_entity {
    ($kind:literal) => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                if let sea_orm::ActiveValue::Set(name) | sea_orm::ActiveValue::Unchanged(name) =
                    &self.name
                {
                    $crate::entities::check_len(
                        "name",
                        name,
                        $crate::entities::REFERENCE_NAME_MAX_LEN,
                    )?;
                }
                Ok(self)
            }
        }

        impl $crate::resolver::NamedEntity for Entity {
            const KIND: &'static str = $kind;

            fn name_column() -> Column {
                Column::Name
            }

            fn slug_column() -> Column {
                Column::Slug
            }

            fn model_id(model: &Model) -> i32 {
                model.id
            }

            fn new_model(name: &str, slug: String) -> ActiveModel {
                ActiveModel {
                    name: sea_orm::Set(name.to_string()),
                    slug: sea_orm::Set(slug),
                    ..Default::default()
                }
            }
        }
    };
}

pub mod certification;
pub mod director;
pub mod genre;
pub mod movie;
pub mod movie_director;
pub mod movie_genre;
pub mod movie_star;
pub mod star;
