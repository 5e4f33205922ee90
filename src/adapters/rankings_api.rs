//! REST client for the rankings backend (native Rust, no SDK).
//!
//! The backend owns the composite-score computation; this adapter only
//! speaks its request/response contract. No retry and no timeout policy:
//! a failed fetch surfaces as a single terminal error per load attempt.

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use crate::domain::RankingsResponse;
use crate::error::{CourtsideError, Result};

#[derive(Clone)]
pub struct RankingsClient {
    http: Client,
    base_url: String,
}

impl RankingsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = Client::builder()
            .user_agent("courtside/0.1")
            .build()
            .map_err(|e| {
                CourtsideError::Internal(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /rankings?season=&qualified=&limit=&offset=`.
    ///
    /// Callers that filter client-side fetch with `qualified = false` so
    /// the qualified-only toggle works without a refetch.
    pub async fn get_rankings(
        &self,
        season: u16,
        qualified: bool,
        limit: u32,
        offset: u32,
    ) -> Result<RankingsResponse> {
        let url = format!("{}/rankings", self.base_url);
        debug!(season, qualified, limit, offset, "fetching rankings");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("season", season.to_string()),
                ("qualified", qualified.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CourtsideError::Fetch {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
