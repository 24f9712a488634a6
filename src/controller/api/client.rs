use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::model::{Fixture, League, LeagueInfo, NewsItem, TeamRecord};

pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// The REST collaborator the pages read from.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn users(&self) -> Result<Vec<TeamRecord>, AppError>;
    async fn fixtures(&self) -> Result<Vec<Fixture>, AppError>;
    async fn leagues(&self) -> Result<Vec<League>, AppError>;
    async fn standings(&self) -> Result<Vec<TeamRecord>, AppError>;
    async fn league_info(&self) -> Result<LeagueInfo, AppError>;
    async fn news(&self) -> Result<Vec<NewsItem>, AppError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// # Errors
    ///
    /// Will return `Err` on a transport failure, a non-success status or a
    /// body that does not parse as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        let parsed = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn users(&self) -> Result<Vec<TeamRecord>, AppError> {
        self.get_json("users").await
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        self.get_json("fixtures").await
    }

    async fn leagues(&self) -> Result<Vec<League>, AppError> {
        self.get_json("leagues").await
    }

    async fn standings(&self) -> Result<Vec<TeamRecord>, AppError> {
        self.get_json("standings").await
    }

    async fn league_info(&self) -> Result<LeagueInfo, AppError> {
        // json-server style backends serve this either as an object or as a
        // one-element array
        let value: Value = self.get_json("leagueInfo").await?;
        let value = match value {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            Value::Array(_) => return Ok(LeagueInfo::default()),
            other => other,
        };
        Ok(serde_json::from_value(value)?)
    }

    async fn news(&self) -> Result<Vec<NewsItem>, AppError> {
        self.get_json("news").await
    }
}
