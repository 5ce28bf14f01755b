use std::sync::Arc;

use moviegraph::{AppState, config::Config, db, graphql, routes, store::Catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviegraph=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    let catalog = Catalog::new(db);
    let schema = graphql::build_schema(catalog.clone());

    let state = Arc::new(AppState { config: config.clone(), catalog, schema });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, graphiql = config.graphiql, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
