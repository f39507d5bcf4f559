// src/graph/wiki.rs
//! Wikipedia link source over the MediaWiki query API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::source::LinkSource;
use crate::config::SourceConfig;
use crate::error::{Result, WikinetError};

/// Article namespace; links into talk, category and file pages are ignored.
const ARTICLE_NAMESPACE: &str = "0";

/// Blocking client for one Wikipedia language edition.
pub struct WikipediaSource {
    client: Client,
    endpoint: String,
}

impl WikipediaSource {
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("https://{}.wikipedia.org/w/api.php", config.language),
        })
    }

    fn query(&self, params: &[(&str, &str)]) -> Result<QueryResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
            ])
            .query(params)
            .send()?;

        if !response.status().is_success() {
            return Err(WikinetError::Api(format!(
                "API request failed: {}",
                response.status()
            )));
        }

        let body: QueryResponse = response.json()?;
        if let Some(error) = body.error {
            return Err(WikinetError::Api(format!("{}: {}", error.code, error.info)));
        }
        Ok(body)
    }
}

impl LinkSource for WikipediaSource {
    fn exists(&self, title: &str) -> Result<bool> {
        let body = self.query(&[("titles", title)])?;
        Ok(body
            .query
            .and_then(|q| q.pages.into_iter().next())
            .is_some_and(|p| !p.missing && !p.invalid))
    }

    fn links(&self, title: &str) -> Result<Vec<String>> {
        let mut links = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut params = vec![
                ("titles", title),
                ("prop", "links"),
                ("plnamespace", ARTICLE_NAMESPACE),
                ("pllimit", "max"),
            ];
            if let Some(ref c) = cursor {
                params.push(("plcontinue", c.as_str()));
            }

            let body = self.query(&params)?;
            match absorb(body, cursor.is_none(), title, &mut links)? {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(title, count = links.len(), "fetched links");
        Ok(links)
    }
}

/// Appends one batch of links and returns the continuation cursor, if any.
/// A first batch whose page is missing or invalid is an error.
fn absorb(
    body: QueryResponse,
    first: bool,
    title: &str,
    links: &mut Vec<String>,
) -> Result<Option<String>> {
    let pages = body.query.map(|q| q.pages).unwrap_or_default();
    if first && pages.first().map_or(true, |p| p.missing || p.invalid) {
        return Err(WikinetError::Api(format!("page `{title}` does not exist")));
    }
    for page in pages {
        links.extend(page.links.into_iter().map(|l| l.title));
    }
    Ok(body.cont.and_then(|c| c.plcontinue))
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "continue")]
    cont: Option<Continue>,
    query: Option<Query>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Continue {
    plcontinue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_links_batch() {
        let body = r#"{
            "continue": {"plcontinue": "123|0|Pablo_Neruda", "continue": "||"},
            "query": {"pages": [{"pageid": 1, "ns": 0, "title": "Gabriela Mistral",
                "links": [{"ns": 0, "title": "Chile"}, {"ns": 0, "title": "Pablo Neruda"}]}]}
        }"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.cont.and_then(|c| c.plcontinue).as_deref(),
            Some("123|0|Pablo_Neruda")
        );
        let pages = parsed.query.unwrap().pages;
        let titles: Vec<_> = pages[0].links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Chile", "Pablo Neruda"]);
    }

    #[test]
    fn test_parse_missing_page() {
        let body = r#"{"query": {"pages": [{"ns": 0, "title": "Nobody Here", "missing": true}]}}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.query.unwrap().pages[0].missing);
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"error": {"code": "badvalue", "info": "Unrecognized value"}}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.unwrap().code, "badvalue");
    }

    #[test]
    fn test_absorb_follows_continuation() {
        let first = r#"{
            "continue": {"plcontinue": "1|0|Mexico", "continue": "||"},
            "query": {"pages": [{"title": "Octavio Paz",
                "links": [{"ns": 0, "title": "Elena Garro"}, {"ns": 0, "title": "Mexico"}]}]}
        }"#;
        let second = r#"{
            "query": {"pages": [{"title": "Octavio Paz",
                "links": [{"ns": 0, "title": "Nobel Prize in Literature"}]}]}
        }"#;
        let mut links = Vec::new();
        let cursor = absorb(serde_json::from_str(first).unwrap(), true, "Octavio Paz", &mut links)
            .unwrap();
        assert_eq!(cursor.as_deref(), Some("1|0|Mexico"));
        let cursor = absorb(serde_json::from_str(second).unwrap(), false, "Octavio Paz", &mut links)
            .unwrap();
        assert_eq!(cursor, None);
        assert_eq!(links, vec!["Elena Garro", "Mexico", "Nobel Prize in Literature"]);
    }

    #[test]
    fn test_absorb_missing_first_batch() {
        let body = r#"{"query": {"pages": [{"title": "Nobody Here", "missing": true}]}}"#;
        let mut links = Vec::new();
        let err = absorb(serde_json::from_str(body).unwrap(), true, "Nobody Here", &mut links)
            .unwrap_err();
        assert!(matches!(err, WikinetError::Api(_)));
        assert!(links.is_empty());
    }

    #[test]
    fn test_absorb_empty_later_batch_is_fine() {
        let mut links = vec!["Chile".to_string()];
        let body = r#"{"query": {"pages": []}}"#;
        let cursor = absorb(serde_json::from_str(body).unwrap(), false, "X", &mut links).unwrap();
        assert_eq!(cursor, None);
        assert_eq!(links, vec!["Chile"]);
    }
}
