use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub external_id: Option<i32>,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub poster_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub overview: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::clue::Entity")]
    Clue,
}

impl Related<super::clue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
