//! Liveness endpoint for the hosting platform.
//!
//! Single unauthenticated route, fixed body, no shared state with the bot.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tracing::info;

async fn alive() -> &'static str {
    "Bot is alive!"
}

fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serve the health endpoint until the process exits.
pub async fn run(port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind health endpoint to {addr}"))?;

    info!("Health endpoint listening on {addr}");

    axum::serve(listener, router())
        .await
        .context("Health endpoint server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alive_body() {
        assert_eq!(alive().await, "Bot is alive!");
    }

    #[tokio::test]
    async fn test_serves_root_over_http() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        let body = reqwest::get(format!("http://{addr}/"))
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "Bot is alive!");
    }
}
