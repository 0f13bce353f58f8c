//! NewsAPI lookup and result formatting for the `/news` command.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const NEWS_API_URL: &str = "https://newsapi.org";
const PAGE_SIZE: u32 = 5;

/// Topic searched when the user gives no argument.
pub const DEFAULT_TOPIC: &str = "startup";

/// One article from the NewsAPI `/v2/everything` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Client for the NewsAPI article-search endpoint.
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(NEWS_API_URL, api_key)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch up to five of the most recent English-language articles whose
    /// titles match `topic`, newest first.
    pub async fn search(&self, topic: &str) -> Result<Vec<Article>> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = PAGE_SIZE.to_string();

        debug!("Searching NewsAPI for '{}'", topic);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", topic),
                ("searchIn", "title"),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to NewsAPI")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("NewsAPI error ({}): {}", status, error_body);
        }

        let parsed: EverythingResponse = response
            .json()
            .await
            .context("Failed to parse NewsAPI response")?;

        Ok(parsed.articles)
    }
}

/// Topic actually searched: whitespace-joined argument tokens, or the
/// default when the user gave none.
pub fn resolve_topic(args: &str) -> String {
    let topic = args.split_whitespace().collect::<Vec<_>>().join(" ");
    if topic.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        topic
    }
}

/// Markdown bullet list of the found articles.
pub fn format_articles(topic: &str, articles: &[Article]) -> String {
    let mut message = format!("**Top 5 News Articles for '{}'**\n\n", title_case(topic));
    for article in articles {
        message.push_str(&format!("▪️ [{}]({})\n\n", article.title, article.url));
    }
    message
}

// Word-initial uppercase, rest lowercased; a word starts after any
// non-alphabetic character.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> NewsClient {
        NewsClient::with_base_url(&server.base_url(), "test-key")
    }

    #[test]
    fn test_resolve_topic_defaults_to_startup() {
        assert_eq!(resolve_topic(""), "startup");
        assert_eq!(resolve_topic("   "), "startup");
    }

    #[test]
    fn test_resolve_topic_joins_tokens() {
        assert_eq!(resolve_topic("funding accelerator"), "funding accelerator");
        assert_eq!(resolve_topic("  funding   accelerator "), "funding accelerator");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("funding accelerator"), "Funding Accelerator");
        assert_eq!(title_case("AI"), "Ai");
        assert_eq!(title_case("startup"), "Startup");
    }

    #[test]
    fn test_format_articles_bullets_each_entry() {
        let articles = vec![
            Article {
                title: "Seed rounds rebound".to_string(),
                url: "https://example.com/a".to_string(),
            },
            Article {
                title: "New accelerator opens".to_string(),
                url: "https://example.com/b".to_string(),
            },
        ];
        let message = format_articles("funding", &articles);
        assert!(message.starts_with("**Top 5 News Articles for 'Funding'**"));
        assert_eq!(message.matches("▪️").count(), 2);
        assert!(message.contains("[Seed rounds rebound](https://example.com/a)"));
        assert!(message.contains("[New accelerator opens](https://example.com/b)"));
    }

    #[tokio::test]
    async fn test_search_sends_expected_query() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "funding")
                .query_param("searchIn", "title")
                .query_param("language", "en")
                .query_param("sortBy", "publishedAt")
                .query_param("pageSize", "5")
                .query_param("apiKey", "test-key");
            then.status(200).json_body(json!({
                "status": "ok",
                "articles": [
                    { "title": "Article one", "url": "https://example.com/1" },
                    { "title": "Article two", "url": "https://example.com/2" }
                ]
            }));
        });

        let articles = client(&server).search("funding").await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Article one");
        assert_eq!(articles[1].url, "https://example.com/2");
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_search_with_empty_article_list() {
        let server = MockServer::start_async().await;

        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200)
                .json_body(json!({ "status": "ok", "articles": [] }));
        });

        let articles = client(&server).search("obscuretopic").await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_search_tolerates_missing_articles_field() {
        let server = MockServer::start_async().await;

        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({ "status": "ok" }));
        });

        let articles = client(&server).search("anything").await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_search_reports_http_error() {
        let server = MockServer::start_async().await;

        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(401).body("{\"status\":\"error\",\"code\":\"apiKeyInvalid\"}");
        });

        let err = client(&server).search("funding").await.unwrap_err();
        assert!(err.to_string().contains("NewsAPI error"));
    }

    #[tokio::test]
    async fn test_search_reports_malformed_payload() {
        let server = MockServer::start_async().await;

        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).body("not json");
        });

        assert!(client(&server).search("funding").await.is_err());
    }
}
