use crate::api::error::{RaceApiError, Result};
use crate::api::models::{CreateRaceBody, Race, Racer, Track};
use crate::api::service::RaceService;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

/// ApiClient issues the HTTP requests against the race server. All operations share one pooled
/// client with a fixed request timeout and a JSON content type.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// new creates the client for the given base address. The base address is the server origin,
    /// e.g. http://localhost:3001; the operation paths are joined onto it.
    pub fn new(base_url: Url, timeout: Duration) -> Result<ApiClient> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(ApiClient { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// check_status maps a non-2xx response onto an explicit status error.
    fn check_status(&self, resp: &reqwest::Response, endpoint: &Url) -> Result<()> {
        if !resp.status().is_success() {
            return Err(RaceApiError::ServerStatus {
                endpoint: endpoint.to_string(),
                status: resp.status(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RaceService for ApiClient {
    async fn get_tracks(&self) -> Result<Vec<Track>> {
        let endpoint = self.endpoint("api/tracks")?;
        tracing::debug!(%endpoint, "calling race server");

        let tracks = self
            .http
            .get(endpoint.as_str())
            .send()
            .await?
            .json()
            .await?;
        Ok(tracks)
    }

    async fn get_racers(&self) -> Result<Vec<Racer>> {
        let endpoint = self.endpoint("api/cars")?;
        tracing::debug!(%endpoint, "calling race server");

        let racers = self
            .http
            .get(endpoint.as_str())
            .send()
            .await?
            .json()
            .await?;
        Ok(racers)
    }

    async fn create_race(&self, player_id: u32, track_id: u32) -> Result<Race> {
        let endpoint = self.endpoint("api/races")?;
        let body = CreateRaceBody {
            player_id,
            track_id,
        };
        tracing::debug!(%endpoint, player_id, track_id, "calling race server");

        let race = self
            .http
            .post(endpoint.as_str())
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        Ok(race)
    }

    async fn start_race(&self, race_id: u32) -> Result<()> {
        let endpoint = self.endpoint(&format!("api/races/{}/start", race_id))?;
        tracing::debug!(%endpoint, "calling race server");

        let resp = self.http.post(endpoint.as_str()).send().await?;
        self.check_status(&resp, &endpoint)?;
        Ok(())
    }

    async fn get_race(&self, race_id: u32) -> Result<Race> {
        let endpoint = self.endpoint(&format!("api/races/{}", race_id))?;
        tracing::debug!(%endpoint, "calling race server");

        let race = self
            .http
            .get(endpoint.as_str())
            .send()
            .await?
            .json()
            .await?;
        Ok(race)
    }

    async fn accelerate(&self, race_id: u32) -> Result<()> {
        let endpoint = self.endpoint(&format!("api/races/{}/accelerate", race_id))?;
        tracing::debug!(%endpoint, "calling race server");

        let resp = self.http.post(endpoint.as_str()).send().await?;
        self.check_status(&resp, &endpoint)?;
        Ok(())
    }
}
