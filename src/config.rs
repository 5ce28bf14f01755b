use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://moviegraph.db?mode=rwc".to_string());

        let graphiql = match std::env::var("GRAPHIQL") {
            Ok(raw) => parse_flag(&raw).context("GRAPHIQL")?,
            Err(_) => true,
        };

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            graphiql,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("no").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
