use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};
use tracing::{debug, warn};

use crate::{error::AppResult, slug::unique_slug};

/// A deduplicated lookup table keyed by a unique `name` column.
pub trait NamedEntity: EntityTrait {
    const KIND: &'static str;

    fn name_column() -> Self::Column;
    fn slug_column() -> Self::Column;
    fn model_id(model: &Self::Model) -> i32;
    fn new_model(name: &str, slug: String) -> Self::ActiveModel;
}

/// Exact-name lookup, inserting a new row when none matches. Returns the id
/// and whether the row was created.
pub async fn get_or_create<E, C>(conn: &C, name: &str) -> AppResult<(i32, bool)>
where
    E: NamedEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
{
    if let Some(existing) = E::find().filter(E::name_column().eq(name)).one(conn).await? {
        return Ok((E::model_id(&existing), false));
    }

    let (slug, collided) = unique_slug::<E, C>(conn, E::slug_column(), name).await?;
    if collided {
        // Names are matched exactly, so "Sci-Fi" and "sci-fi" become two rows.
        warn!(kind = E::KIND, name, slug = %slug, "name slugs onto an existing entry");
    }

    // ActiveModel::insert runs the entity's save hook
    let id = E::model_id(&E::new_model(name, slug).insert(conn).await?);
    debug!(kind = E::KIND, name, id, "created reference entry");
    Ok((id, true))
}

/// Per-run name → id map in front of [`get_or_create`]. Only valid inside the
/// transaction it was filled from.
pub struct Resolver<E> {
    ids: HashMap<String, i32>,
    created: usize,
    _entity: PhantomData<E>,
}

impl<E> Resolver<E>
where
    E: NamedEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    pub fn new() -> Self {
        Self { ids: HashMap::new(), created: 0, _entity: PhantomData }
    }

    pub async fn resolve<C: ConnectionTrait>(&mut self, conn: &C, name: &str) -> AppResult<i32> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let (id, created) = get_or_create::<E, C>(conn, name).await?;
        if created {
            self.created += 1;
        }
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Rows inserted by this resolver.
    pub fn created(&self) -> usize {
        self.created
    }
}
