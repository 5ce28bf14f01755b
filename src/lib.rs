pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod graphql;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use crate::{config::Config, graphql::AppSchema, store::Catalog};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
    pub schema: AppSchema,
}
