use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "star")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub poster: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_star::Entity")]
    MovieStar,
}

impl Related<super::movie_star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieStar.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_star::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_star::Relation::Star.def().rev())
    }
}

reference_entity!("star");
