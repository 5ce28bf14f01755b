//! Public object types. Each wraps a storage row and decides field by field
//! what clients see, so column names never leak into the API.

use async_graphql::{
    Context, ID, InputValueError, InputValueResult, Object, Result, Scalar, ScalarType, Value,
};

use crate::{
    entities::{actor, movie, movie_cast, review},
    store::Catalog,
};

/// Calendar date exchanged as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Date(pub jiff::civil::Date);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => jiff::civil::Date::strptime("%Y-%m-%d", s)
                .map(Date)
                .map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

/// UTC instant exchanged as RFC 3339.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateTime(pub jiff::Timestamp);

#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => s.parse().map(DateTime).map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

fn parse_stored_date(raw: &str) -> Result<Date> {
    Ok(Date(raw.parse()?))
}

pub struct Movie(pub movie::Model);

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn summary(&self) -> &str {
        &self.0.summary
    }

    /// Running time in minutes.
    async fn duration(&self) -> i32 {
        self.0.duration
    }

    async fn release_date(&self) -> Result<Date> {
        parse_stored_date(&self.0.release_date)
    }

    async fn trailer_url(&self) -> &str {
        &self.0.trailer_url
    }

    /// Cast rows for this movie, each carrying the character name.
    async fn cast(&self, ctx: &Context<'_>) -> Result<Vec<MovieCast>> {
        let catalog = ctx.data::<Catalog>()?;
        let rows = catalog.cast_for_movie(self.0.id).await?;
        Ok(rows.into_iter().map(MovieCast).collect())
    }

    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let catalog = ctx.data::<Catalog>()?;
        let rows = catalog.actors_for_movie(self.0.id).await?;
        Ok(rows.into_iter().map(Actor).collect())
    }

    /// Newest first.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Catalog>()?;
        let rows = catalog.reviews_for_movie(self.0.id).await?;
        Ok(rows.into_iter().map(Review).collect())
    }
}

pub struct Actor(pub actor::Model);

#[Object]
impl Actor {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn date_of_birth(&self) -> Result<Date> {
        parse_stored_date(&self.0.date_of_birth)
    }

    async fn biography(&self) -> &str {
        &self.0.biography
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let catalog = ctx.data::<Catalog>()?;
        let rows = catalog.movies_for_actor(self.0.id).await?;
        Ok(rows.into_iter().map(Movie).collect())
    }

    /// Every part this actor plays.
    async fn roles(&self, ctx: &Context<'_>) -> Result<Vec<MovieCast>> {
        let catalog = ctx.data::<Catalog>()?;
        let rows = catalog.cast_for_actor(self.0.id).await?;
        Ok(rows.into_iter().map(MovieCast).collect())
    }
}

pub struct MovieCast(pub movie_cast::Model);

#[Object]
impl MovieCast {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn movie(&self, ctx: &Context<'_>) -> Result<Movie> {
        let catalog = ctx.data::<Catalog>()?;
        let movie = catalog
            .find_movie(self.0.movie_id)
            .await?
            .ok_or_else(|| format!("movie {} no longer exists", self.0.movie_id))?;
        Ok(Movie(movie))
    }

    async fn actor(&self, ctx: &Context<'_>) -> Result<Actor> {
        let catalog = ctx.data::<Catalog>()?;
        let actor = catalog
            .find_actor(self.0.actor_id)
            .await?
            .ok_or_else(|| format!("actor {} no longer exists", self.0.actor_id))?;
        Ok(Actor(actor))
    }

    async fn character_name(&self) -> &str {
        &self.0.character_name
    }
}

pub struct Review(pub review::Model);

#[Object]
impl Review {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn movie(&self, ctx: &Context<'_>) -> Result<Movie> {
        let catalog = ctx.data::<Catalog>()?;
        let movie = catalog
            .find_movie(self.0.movie_id)
            .await?
            .ok_or_else(|| format!("movie {} no longer exists", self.0.movie_id))?;
        Ok(Movie(movie))
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    /// Between 1 and 5.
    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn would_recommend(&self) -> bool {
        self.0.would_recommend
    }

    async fn created_at(&self) -> Result<DateTime> {
        Ok(DateTime(jiff::Timestamp::from_microsecond(self.0.created_at)?))
    }
}
