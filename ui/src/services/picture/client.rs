use reqwest::Client;
use tracing::{info, instrument};

use super::errors::FetchError;
use super::types::PictureMetadata;

const PICTURE_HOST: &str = "https://picsum.photos";

/// Derives the picture id the page shows: current time modulo 100,
/// which is the range of ids the host serves.
pub fn picture_id(now_ms: u64) -> u64 {
    now_ms % 100
}

/// Client for the picture metadata host.
#[derive(Clone)]
pub struct PictureClient {
    http_client: Client,
}

impl PictureClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Fetches metadata for a specific picture id.
    #[instrument(skip(self), err)]
    pub async fn fetch_picture_info(&self, id: u64) -> Result<PictureMetadata, FetchError> {
        let info_url = format!("{PICTURE_HOST}/id/{id}/info");

        let response = self
            .http_client
            .get(&info_url)
            .send()
            .await
            .map_err(|err| FetchError::Network {
                message: format!("failed to reach picture host: {err}"),
            })?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        let metadata: PictureMetadata =
            response.json().await.map_err(|err| FetchError::Network {
                message: format!("failed to parse picture metadata: {err}"),
            })?;

        info!("fetched picture {} by {}", metadata.id, metadata.author);
        Ok(metadata)
    }

    /// Fetches metadata for a time-derived "random" picture.
    pub async fn fetch_random_picture(&self) -> Result<PictureMetadata, FetchError> {
        let id = picture_id(js_sys::Date::now() as u64);
        self.fetch_picture_info(id).await
    }
}

impl Default for PictureClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_id_stays_within_the_hosted_range() {
        assert_eq!(picture_id(0), 0);
        assert_eq!(picture_id(99), 99);
        assert_eq!(picture_id(100), 0);
        assert_eq!(picture_id(1_692_800_000_123), 1_692_800_000_123 % 100);
        assert!(picture_id(u64::MAX) < 100);
    }

    #[test]
    fn picture_metadata_parses_the_host_response() {
        let raw = r#"{
            "id": "42",
            "author": "Alejandro Escamilla",
            "width": 5000,
            "height": 3333,
            "url": "https://unsplash.com/photos/abc",
            "download_url": "https://picsum.photos/id/42/5000/3333"
        }"#;

        let metadata: PictureMetadata = serde_json::from_str(raw).unwrap();
        assert_eq!(metadata.id, "42");
        assert_eq!(metadata.author, "Alejandro Escamilla");
        assert_eq!(metadata.width, 5000);
    }
}
