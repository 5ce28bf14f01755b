use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,
    /// Minutes.
    pub duration: i32,
    /// ISO-8601 calendar date.
    pub release_date: String,
    pub trailer_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_cast::Entity")]
    MovieCast,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::movie_cast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCast.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_cast::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_cast::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
