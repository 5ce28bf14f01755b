mod common;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use moviegraph::{AppState, config::Config, graphql, routes};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app(graphiql: bool) -> Router {
    let catalog = common::catalog().await;
    let config = Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        database_url: "sqlite::memory:".to_string(),
        graphiql,
    };
    let schema = graphql::build_schema(catalog.clone());
    routes::router(Arc::new(AppState { config: Arc::new(config), catalog, schema }))
}

async fn post_graphql(app: &Router, query: &str) -> (StatusCode, Value) {
    let body = json!({ "query": query }).to_string();
    let resp = app
        .clone()
        .oneshot(
            Request::post("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn failed_mutation_is_still_http_ok() {
    let app = app(false).await;

    let (status, body) = post_graphql(
        &app,
        r#"mutation { createReview(movieId: 1, description: "Great", rating: 9,
                                   wouldRecommend: true) { review { id } success message } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "{body}");
    assert_eq!(
        body["data"]["createReview"],
        json!({ "review": null, "success": false, "message": "Rating must be between 1 and 5." })
    );
}

#[tokio::test]
async fn unknown_field_is_a_protocol_error() {
    let app = app(false).await;

    let (_, body) = post_graphql(&app, "{ allDirectors { id } }").await;

    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()), "{body}");
    assert!(body.get("data").is_none_or(Value::is_null), "{body}");
}

#[tokio::test]
async fn create_then_query_over_http() {
    let app = app(false).await;

    let (_, body) = post_graphql(
        &app,
        r#"mutation { createMovie(title: "Inception", summary: "...", duration: 148,
                                  releaseDate: "2010-07-16", trailerUrl: "") { success } }"#,
    )
    .await;
    assert_eq!(body["data"]["createMovie"]["success"], true);

    let (status, body) = post_graphql(&app, "{ allMovies { title duration } }").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["allMovies"], json!([{ "title": "Inception", "duration": 148 }]));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(false).await;
    let resp = app.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn graphiql_is_served_only_when_enabled() {
    let enabled = app(true).await;
    let resp =
        enabled.oneshot(Request::get("/graphql").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));

    let disabled = app(false).await;
    let resp =
        disabled.oneshot(Request::get("/graphql").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
