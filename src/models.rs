use jiff::civil::Date;
use sea_orm::Set;

use crate::{
    entities::{movie, review},
    error::ValidationError,
};

/// A review score, always within `1..=5`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub summary: String,
    pub duration: i32,
    pub release_date: Date,
    pub trailer_url: String,
}

/// Fields of an existing movie to overwrite. `None` leaves the stored value alone.
#[derive(Clone, Debug, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub duration: Option<i32>,
    pub release_date: Option<Date>,
    pub trailer_url: Option<String>,
}

impl MoviePatch {
    pub fn apply(self, model: &mut movie::ActiveModel) {
        if let Some(title) = self.title {
            model.title = Set(title);
        }
        if let Some(summary) = self.summary {
            model.summary = Set(summary);
        }
        if let Some(duration) = self.duration {
            model.duration = Set(duration);
        }
        if let Some(release_date) = self.release_date {
            model.release_date = Set(release_date.to_string());
        }
        if let Some(trailer_url) = self.trailer_url {
            model.trailer_url = Set(trailer_url);
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewActor {
    pub name: String,
    pub date_of_birth: Date,
    pub biography: String,
}

#[derive(Clone, Debug)]
pub struct NewCast {
    pub movie_id: i32,
    pub actor_id: i32,
    pub character_name: String,
}

#[derive(Clone, Debug)]
pub struct NewReview {
    pub movie_id: i32,
    pub description: String,
    pub rating: i32,
    pub would_recommend: bool,
}

/// Fields of an existing review to overwrite. `created_at` is never patchable.
#[derive(Clone, Debug, Default)]
pub struct ReviewPatch {
    pub description: Option<String>,
    pub rating: Option<i32>,
    pub would_recommend: Option<bool>,
}

impl ReviewPatch {
    /// Validates every supplied field before touching `model`, so a rejected
    /// patch leaves it unchanged.
    pub fn apply(self, model: &mut review::ActiveModel) -> Result<(), ValidationError> {
        let rating = self.rating.map(Rating::new).transpose()?;

        if let Some(description) = self.description {
            model.description = Set(description);
        }
        if let Some(rating) = rating {
            model.rating = Set(rating.get());
        }
        if let Some(would_recommend) = self.would_recommend {
            model.would_recommend = Set(would_recommend);
        }
        Ok(())
    }
}
