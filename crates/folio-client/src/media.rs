//! Image uploads for the rich-text editor.

use crate::config::{ClientConfig, MediaConfig};
use crate::{Error, Result};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadError {
    error: UploadErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UploadErrorDetail {
    message: String,
}

/// Uploads images to the media CDN with an unsigned preset.
#[derive(Debug, Clone)]
pub struct MediaUploader {
    http: reqwest::Client,
    endpoint: String,
    upload_preset: String,
}

impl MediaUploader {
    /// Create an uploader. Fails with [`Error::UploadsDisabled`] when the
    /// configuration carries no media settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let media: &MediaConfig = config.media.as_ref().ok_or(Error::UploadsDisabled)?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/v1_1/{}/image/upload",
                media.base_url.trim_end_matches('/'),
                media.cloud
            ),
            upload_preset: media.upload_preset.clone(),
        })
    }

    /// Full URL of the upload endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload `bytes` as `file_name` and return the public HTTPS URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let size = bytes.len();
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        log::debug!("Uploading {file_name} ({size} bytes)");
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<UploadError>().await {
                Ok(body) => body.error.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response.json().await?;
        log::info!("Uploaded {file_name} to {}", body.secure_url);
        Ok(body.secure_url)
    }
}
