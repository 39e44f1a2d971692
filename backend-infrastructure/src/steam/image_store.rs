use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tokio::fs;
use uuid::Uuid;

use backend_domain::ports::ImageStore;
use backend_domain::{ImageError, DEFAULT_MAX_RESPONSE_BYTES};

use crate::http_client::read_body_capped;

/// Stores downloaded item images under `image_dir` with random file names.
pub struct LocalImageStore {
    client: Client,
    image_dir: PathBuf,
    max_bytes: u64,
}

impl LocalImageStore {
    pub fn new(client: Client, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            image_dir: image_dir.into(),
            max_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

pub fn extension_for(content_type: &str) -> &'static str {
    if content_type.contains("png") {
        ".png"
    } else {
        ".jpg"
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store_remote_image(&self, url: &str) -> Result<String, ImageError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ImageError::DownloadFailed(err.to_string()))?;
        if response.status() != StatusCode::OK {
            return Err(ImageError::DownloadFailed(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        let bytes = read_body_capped(response, self.max_bytes)
            .await
            .map_err(|err| ImageError::DownloadFailed(err.to_string()))?;

        let name = format!("{}{}", Uuid::new_v4(), extension_for(&content_type));
        fs::create_dir_all(&self.image_dir)
            .await
            .map_err(|err| ImageError::WriteFailed(err.to_string()))?;
        fs::write(self.image_dir.join(&name), &bytes)
            .await
            .map_err(|err| ImageError::WriteFailed(err.to_string()))?;
        Ok(name)
    }

    async fn remove_image(&self, name: &str) -> Result<(), ImageError> {
        // Only bare file names produced by store_remote_image are accepted.
        if name.is_empty()
            || name.contains(|c: char| c == '/' || c == '\\')
            || name.starts_with('.')
        {
            return Err(ImageError::RemoveFailed(format!("invalid image name '{}'", name)));
        }
        match fs::remove_file(self.image_dir.join(name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ImageError::RemoveFailed(err.to_string())),
        }
    }
}
