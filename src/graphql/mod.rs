//! GraphQL surface of the catalog.
//!
//! - [`query`] - read-only lookups
//! - [`mutation`] - writes, each answering with a `{entity, success, message}` envelope
//! - [`types`] - public object types and scalars

mod mutation;
mod query;
mod types;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{Actor, Date, DateTime, Movie, MovieCast, Review};

use crate::store::Catalog;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Malformed documents, unknown fields and missing arguments are rejected by
/// schema validation before any resolver runs.
pub fn build_schema(catalog: Catalog) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(catalog).finish()
}
