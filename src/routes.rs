use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, error::AppResult};

pub fn router(state: Arc<AppState>) -> Router {
    let endpoint = if state.config.graphiql {
        get(graphiql).post(graphql)
    } else {
        post(graphql)
    };

    Router::new()
        .route("/graphql", endpoint)
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

/// Mutation failures come back inside their envelope with a 200 status;
/// only invalid documents produce GraphQL errors.
pub async fn graphql(State(state): State<Arc<AppState>>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn health(State(state): State<Arc<AppState>>) -> AppResult<&'static str> {
    state.catalog.db().ping().await?;
    Ok("ok")
}
