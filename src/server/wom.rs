//! Wise Old Man API client.

use crate::server::{error::competition::CompetitionError, model::competition::Competition};

/// Thin wrapper over the shared HTTP client for the competition endpoint.
#[derive(Clone)]
pub struct WomClient {
    http: reqwest::Client,
    base_url: String,
}

impl WomClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches a competition with its participations.
    ///
    /// # Returns
    /// - `Ok(Competition)` - Decoded competition detail
    /// - `Err(CompetitionError::Request)` - Connection failed or timed out
    /// - `Err(CompetitionError::Status)` - Non-success status, including 404
    /// - `Err(CompetitionError::Decode)` - Body is not a competition
    pub async fn get_competition(&self, competition_id: u64) -> Result<Competition, CompetitionError> {
        let url = format!("{}/competitions/{}", self.base_url, competition_id);

        tracing::debug!(competition_id, %url, "Fetching competition");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompetitionError::Status {
                competition_id,
                status,
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| CompetitionError::Decode {
            competition_id,
            source,
        })
    }
}
