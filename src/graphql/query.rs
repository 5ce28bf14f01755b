use async_graphql::{Context, Object, Result};

use crate::{
    graphql::types::{Actor, Movie, Review},
    store::Catalog,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every movie, newest release first.
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.list_movies().await?.into_iter().map(Movie).collect())
    }

    async fn movie(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Movie>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.find_movie(id).await?.map(Movie))
    }

    /// Every actor, alphabetical by name.
    async fn all_actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.list_actors().await?.into_iter().map(Actor).collect())
    }

    async fn actor(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Actor>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.find_actor(id).await?.map(Actor))
    }

    /// Every review, newest first.
    async fn all_reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.list_reviews().await?.into_iter().map(Review).collect())
    }

    /// Empty for an unknown movie.
    async fn reviews_by_movie(&self, ctx: &Context<'_>, movie_id: i32) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.reviews_for_movie(movie_id).await?.into_iter().map(Review).collect())
    }
}
