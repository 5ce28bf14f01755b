#![allow(dead_code)]

use async_graphql::Response;
use moviegraph::{
    db,
    graphql::{self, AppSchema},
    store::Catalog,
};
use serde_json::Value;

pub async fn catalog() -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    Catalog::new(db)
}

pub async fn schema() -> AppSchema {
    graphql::build_schema(catalog().await)
}

/// Runs a document that must pass validation and returns its `data` as JSON.
pub async fn run(schema: &AppSchema, document: &str) -> Value {
    let resp = schema.execute(document).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.into_json().unwrap()
}

pub async fn run_raw(schema: &AppSchema, document: &str) -> Response {
    schema.execute(document).await
}

pub async fn create_movie(schema: &AppSchema, title: &str, release_date: &str) -> i64 {
    let data = run(
        schema,
        &format!(
            r#"mutation {{
                createMovie(title: "{title}", summary: "...", duration: 148,
                            releaseDate: "{release_date}", trailerUrl: "") {{
                    movie {{ id }} success message
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["createMovie"]["success"], true);
    data["createMovie"]["movie"]["id"].as_str().unwrap().parse().unwrap()
}

pub async fn create_actor(schema: &AppSchema, name: &str) -> i64 {
    let data = run(
        schema,
        &format!(
            r#"mutation {{
                createActor(name: "{name}", dateOfBirth: "1974-11-11") {{
                    actor {{ id }} success
                }}
            }}"#
        ),
    )
    .await;
    assert_eq!(data["createActor"]["success"], true);
    data["createActor"]["actor"]["id"].as_str().unwrap().parse().unwrap()
}
