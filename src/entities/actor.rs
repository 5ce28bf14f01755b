use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// ISO-8601 calendar date.
    pub date_of_birth: String,
    #[sea_orm(column_type = "Text")]
    pub biography: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_cast::Entity")]
    MovieCast,
}

impl Related<super::movie_cast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCast.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_cast::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_cast::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
