use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum StarRole {
    #[sea_orm(string_value = "Lead")]
    Lead,
    #[sea_orm(string_value = "Supporting")]
    Supporting,
    #[sea_orm(string_value = "Cameo")]
    Cameo,
    #[sea_orm(string_value = "Episodic")]
    Episodic,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_star")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_id: i32,
    pub star_id: i32,
    pub role: Option<StarRole>,
    /// Minutes on screen.
    pub screen_time: Option<i32>,
    pub salary: Option<Decimal>,
    pub character_name: Option<String>,
    pub debut: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_delete = "Cascade"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::star::Entity",
        from = "Column::StarId",
        to = "super::star::Column::Id",
        on_delete = "Cascade"
    )]
    Star,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Star.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
