use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::PhotoCandidate, ports::ImageSearchClient},
};

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Clone)]
pub struct PexelsImageSearch {
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    width: u32,
    height: u32,
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    original: String,
}

impl From<Photo> for PhotoCandidate {
    fn from(photo: Photo) -> Self {
        PhotoCandidate {
            width: photo.width,
            height: photo.height,
            url: photo.src.original,
        }
    }
}

impl PexelsImageSearch {
    pub fn new(api_key: Option<String>) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }
}

impl ImageSearchClient for PexelsImageSearch {
    async fn search_photos(
        &self,
        query: String,
        per_page: u32,
    ) -> Result<Vec<PhotoCandidate>, CoreError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("Pexels API key is not configured, skipping photo search");
            return Ok(Vec::new());
        };

        let response = self
            .client
            .get(PEXELS_SEARCH_URL)
            .header("Authorization", api_key)
            .query(&[("query", query.as_str()), ("per_page", &per_page.to_string())])
            .send()
            .await
            .map_err(|e| {
                error!("Pexels request failed: {}", e);
                CoreError::ExternalServiceError(format!("image search error: {}", e))
            })?;

        if !response.status().is_success() {
            warn!("Pexels search returned status {}", response.status());
            return Ok(Vec::new());
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Pexels response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(body.photos.into_iter().map(PhotoCandidate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_search_results_to_candidates() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "page": 1,
                "photos": [
                    {"id": 1, "width": 4000, "height": 3000, "src": {"original": "https://img/1.jpg", "small": "x"}},
                    {"id": 2, "width": 1000, "height": 2000, "src": {"original": "https://img/2.jpg"}}
                ]
            }"#,
        )
        .unwrap();

        let candidates: Vec<PhotoCandidate> =
            body.photos.into_iter().map(PhotoCandidate::from).collect();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].url, "https://img/1.jpg");
        assert_eq!(candidates[1].height, 2000);
    }

    #[tokio::test]
    async fn missing_api_key_yields_no_candidates() {
        let search = PexelsImageSearch::new(Some("  ".to_string())).unwrap();

        let photos = search.search_photos("pasta".to_string(), 5).await.unwrap();

        assert!(photos.is_empty());
    }
}
