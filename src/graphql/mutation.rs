use async_graphql::{Context, Object, Result, SimpleObject};
use tracing::warn;

use crate::{
    error::CatalogError,
    graphql::types::{Actor, Date, Movie, MovieCast, Review},
    models::{MoviePatch, NewActor, NewCast, NewMovie, NewReview, ReviewPatch},
    store::Catalog,
};

/// Splits a catalog result into envelope parts. Failures never escape as
/// GraphQL errors; their text becomes the message.
fn settle<T, U>(
    operation: &'static str,
    result: Result<T, CatalogError>,
    ok_message: &str,
    wrap: impl FnOnce(T) -> U,
) -> (Option<U>, bool, String) {
    match result {
        Ok(value) => (Some(wrap(value)), true, ok_message.to_string()),
        Err(err) => {
            warn!(operation, error = %err, "mutation failed");
            (None, false, err.to_string())
        },
    }
}

#[derive(SimpleObject)]
pub struct MoviePayload {
    pub movie: Option<Movie>,
    pub success: bool,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct DeleteMoviePayload {
    pub success: bool,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct ActorPayload {
    pub actor: Option<Actor>,
    pub success: bool,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct MovieCastPayload {
    pub movie_cast: Option<MovieCast>,
    pub success: bool,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct ReviewPayload {
    pub review: Option<Review>,
    pub success: bool,
    pub message: String,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        summary: String,
        duration: i32,
        release_date: Date,
        trailer_url: String,
    ) -> Result<MoviePayload> {
        let catalog = ctx.data::<Catalog>()?;
        let result = catalog
            .create_movie(NewMovie {
                title,
                summary,
                duration,
                release_date: release_date.0,
                trailer_url,
            })
            .await;
        let (movie, success, message) =
            settle("createMovie", result, "Movie created successfully.", Movie);
        Ok(MoviePayload { movie, success, message })
    }

    /// Changes only the supplied fields.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: Option<String>,
        summary: Option<String>,
        duration: Option<i32>,
        release_date: Option<Date>,
        trailer_url: Option<String>,
    ) -> Result<MoviePayload> {
        let catalog = ctx.data::<Catalog>()?;
        let patch = MoviePatch {
            title,
            summary,
            duration,
            release_date: release_date.map(|d| d.0),
            trailer_url,
        };
        let result = catalog.update_movie(id, patch).await;
        let (movie, success, message) =
            settle("updateMovie", result, "Movie updated successfully.", Movie);
        Ok(MoviePayload { movie, success, message })
    }

    async fn delete_movie(&self, ctx: &Context<'_>, id: i32) -> Result<DeleteMoviePayload> {
        let catalog = ctx.data::<Catalog>()?;
        let result = catalog.delete_movie(id).await;
        let (_, success, message) =
            settle("deleteMovie", result, "Movie deleted successfully.", |()| ());
        Ok(DeleteMoviePayload { success, message })
    }

    async fn create_actor(
        &self,
        ctx: &Context<'_>,
        name: String,
        date_of_birth: Date,
        biography: Option<String>,
    ) -> Result<ActorPayload> {
        let catalog = ctx.data::<Catalog>()?;
        let result = catalog
            .create_actor(NewActor {
                name,
                date_of_birth: date_of_birth.0,
                biography: biography.unwrap_or_default(),
            })
            .await;
        let (actor, success, message) =
            settle("createActor", result, "Actor created successfully.", Actor);
        Ok(ActorPayload { actor, success, message })
    }

    async fn add_actor_to_movie(
        &self,
        ctx: &Context<'_>,
        movie_id: i32,
        actor_id: i32,
        character_name: String,
    ) -> Result<MovieCastPayload> {
        let catalog = ctx.data::<Catalog>()?;
        let result =
            catalog.add_actor_to_movie(NewCast { movie_id, actor_id, character_name }).await;
        let (movie_cast, success, message) =
            settle("addActorToMovie", result, "Actor added to movie successfully.", MovieCast);
        Ok(MovieCastPayload { movie_cast, success, message })
    }

    async fn create_review(
        &self,
        ctx: &Context<'_>,
        movie_id: i32,
        description: String,
        rating: i32,
        would_recommend: bool,
    ) -> Result<ReviewPayload> {
        let catalog = ctx.data::<Catalog>()?;
        let result = catalog
            .create_review(NewReview { movie_id, description, rating, would_recommend })
            .await;
        let (review, success, message) =
            settle("createReview", result, "Review created successfully.", Review);
        Ok(ReviewPayload { review, success, message })
    }

    /// Changes only the supplied fields. A rating outside 1..=5 rejects the
    /// whole update.
    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: i32,
        description: Option<String>,
        rating: Option<i32>,
        would_recommend: Option<bool>,
    ) -> Result<ReviewPayload> {
        let catalog = ctx.data::<Catalog>()?;
        let patch = ReviewPatch { description, rating, would_recommend };
        let result = catalog.update_review(id, patch).await;
        let (review, success, message) =
            settle("updateReview", result, "Review updated successfully.", Review);
        Ok(ReviewPayload { review, success, message })
    }
}
