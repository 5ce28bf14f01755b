use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::{
    entities::{actor, movie, movie_cast, review},
    error::{CatalogError, EntityKind, is_foreign_key_violation},
    models::{MoviePatch, NewActor, NewCast, NewMovie, NewReview, Rating, ReviewPatch},
};

/// Read and write access to the movie catalog. Every statement the service
/// issues goes through here.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Newest release first.
    pub async fn list_movies(&self) -> Result<Vec<movie::Model>, DbErr> {
        movie::Entity::find()
            .order_by_desc(movie::Column::ReleaseDate)
            .order_by_desc(movie::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_movie(&self, id: i32) -> Result<Option<movie::Model>, DbErr> {
        movie::Entity::find_by_id(id).one(&self.db).await
    }

    /// Alphabetical by name.
    pub async fn list_actors(&self) -> Result<Vec<actor::Model>, DbErr> {
        actor::Entity::find()
            .order_by_asc(actor::Column::Name)
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_actor(&self, id: i32) -> Result<Option<actor::Model>, DbErr> {
        actor::Entity::find_by_id(id).one(&self.db).await
    }

    /// Newest first.
    pub async fn list_reviews(&self) -> Result<Vec<review::Model>, DbErr> {
        review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(&self.db)
            .await
    }

    /// Empty when the movie has no reviews or does not exist.
    pub async fn reviews_for_movie(&self, movie_id: i32) -> Result<Vec<review::Model>, DbErr> {
        review::Entity::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_review(&self, id: i32) -> Result<Option<review::Model>, DbErr> {
        review::Entity::find_by_id(id).one(&self.db).await
    }

    /// Cast rows of a movie in the order they were added.
    pub async fn cast_for_movie(&self, movie_id: i32) -> Result<Vec<movie_cast::Model>, DbErr> {
        movie_cast::Entity::find()
            .filter(movie_cast::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_cast::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn cast_for_actor(&self, actor_id: i32) -> Result<Vec<movie_cast::Model>, DbErr> {
        movie_cast::Entity::find()
            .filter(movie_cast::Column::ActorId.eq(actor_id))
            .order_by_asc(movie_cast::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn actors_for_movie(&self, movie_id: i32) -> Result<Vec<actor::Model>, DbErr> {
        actor::Entity::find()
            .inner_join(movie_cast::Entity)
            .filter(movie_cast::Column::MovieId.eq(movie_id))
            .order_by_asc(actor::Column::Name)
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn movies_for_actor(&self, actor_id: i32) -> Result<Vec<movie::Model>, DbErr> {
        movie::Entity::find()
            .inner_join(movie_cast::Entity)
            .filter(movie_cast::Column::ActorId.eq(actor_id))
            .order_by_desc(movie::Column::ReleaseDate)
            .order_by_desc(movie::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create_movie(&self, new: NewMovie) -> Result<movie::Model, CatalogError> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            summary: Set(new.summary),
            duration: Set(new.duration),
            release_date: Set(new.release_date.to_string()),
            trailer_url: Set(new.trailer_url),
        };
        let movie = model.insert(&self.db).await?;
        debug!(movie_id = movie.id, "movie created");
        Ok(movie)
    }

    pub async fn update_movie(
        &self,
        id: i32,
        patch: MoviePatch,
    ) -> Result<movie::Model, CatalogError> {
        let movie = self.find_movie(id).await?.ok_or(CatalogError::NotFound(EntityKind::Movie))?;

        let mut active = movie.clone().into_active_model();
        patch.apply(&mut active);
        if !active.is_changed() {
            return Ok(movie);
        }

        let movie = active.update(&self.db).await?;
        debug!(movie_id = movie.id, "movie updated");
        Ok(movie)
    }

    /// Cast and review rows of the movie go with it through `ON DELETE CASCADE`.
    pub async fn delete_movie(&self, id: i32) -> Result<(), CatalogError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(CatalogError::NotFound(EntityKind::Movie));
        }
        debug!(movie_id = id, "movie deleted");
        Ok(())
    }

    pub async fn create_actor(&self, new: NewActor) -> Result<actor::Model, CatalogError> {
        let model = actor::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            date_of_birth: Set(new.date_of_birth.to_string()),
            biography: Set(new.biography),
        };
        let actor = model.insert(&self.db).await?;
        debug!(actor_id = actor.id, "actor created");
        Ok(actor)
    }

    pub async fn add_actor_to_movie(
        &self,
        new: NewCast,
    ) -> Result<movie_cast::Model, CatalogError> {
        let movie =
            self.find_movie(new.movie_id).await?.ok_or(CatalogError::NotFound(EntityKind::Movie))?;
        let actor =
            self.find_actor(new.actor_id).await?.ok_or(CatalogError::NotFound(EntityKind::Actor))?;

        let model = movie_cast::ActiveModel {
            id: NotSet,
            movie_id: Set(movie.id),
            actor_id: Set(actor.id),
            character_name: Set(new.character_name),
        };
        let cast = model.insert(&self.db).await?;
        debug!(movie_id = movie.id, actor_id = actor.id, cast_id = cast.id, "actor cast");
        Ok(cast)
    }

    pub async fn create_review(&self, new: NewReview) -> Result<review::Model, CatalogError> {
        let rating = Rating::new(new.rating)?;
        let movie =
            self.find_movie(new.movie_id).await?.ok_or(CatalogError::NotFound(EntityKind::Movie))?;

        let model = review::ActiveModel {
            id: NotSet,
            movie_id: Set(movie.id),
            description: Set(new.description),
            rating: Set(rating.get()),
            would_recommend: Set(new.would_recommend),
            created_at: Set(now_micros()),
        };
        let review = model.insert(&self.db).await.map_err(review_insert_error)?;
        debug!(movie_id = movie.id, review_id = review.id, "review created");
        Ok(review)
    }

    pub async fn update_review(
        &self,
        id: i32,
        patch: ReviewPatch,
    ) -> Result<review::Model, CatalogError> {
        let review =
            self.find_review(id).await?.ok_or(CatalogError::NotFound(EntityKind::Review))?;

        let mut active = review.clone().into_active_model();
        patch.apply(&mut active)?;
        if !active.is_changed() {
            return Ok(review);
        }

        let review = active.update(&self.db).await?;
        debug!(review_id = review.id, "review updated");
        Ok(review)
    }
}

// The movie can be deleted between the lookup and the insert.
fn review_insert_error(err: DbErr) -> CatalogError {
    if is_foreign_key_violation(&err) {
        CatalogError::NotFound(EntityKind::Movie)
    } else {
        CatalogError::from(err)
    }
}

fn now_micros() -> i64 {
    jiff::Timestamp::now().as_microsecond()
}
