// SPDX-License-Identifier: MPL-2.0
//! Client for the remote wallpaper generation service.
//!
//! This module provides functionality for:
//! - Uploading one image plus a resolution list as a multipart request
//! - Decoding the `{ "images": [{ "res", "url" }] }` response
//! - Probing the service health endpoint at startup
//! - Fetching generated previews and streaming downloads to disk
//!
//! # Failure Model
//!
//! Every failure (transport, non-success status, malformed payload) maps to a
//! [`GenerateError`]. Callers collapse all of them into one user-facing
//! message; the variant detail is only meant for logs.

pub mod resolution;

use crate::app::config::ServiceConfig;
use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Multipart field carrying the binary image.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the comma-joined resolution identifiers.
pub const RESOLUTIONS_FIELD: &str = "resolutions";

/// Separator used when joining resolution identifiers.
pub const RESOLUTION_SEPARATOR: &str = ",";

/// Result type for generation service operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while talking to the generation service.
#[derive(Debug, Clone)]
pub enum GenerateError {
    /// The service URL from the configuration is not usable.
    InvalidUrl(String),
    /// The request could not be sent or the body could not be read.
    Transport(String),
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The response body is not the expected JSON document.
    Decode(String),
    /// Local file I/O failed (downloads).
    Io(String),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidUrl(msg) => write!(f, "Invalid service URL: {msg}"),
            GenerateError::Transport(msg) => write!(f, "Transport failure: {msg}"),
            GenerateError::Status(code) => write!(f, "HTTP status: {code}"),
            GenerateError::Decode(msg) => write!(f, "Malformed response: {msg}"),
            GenerateError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Transport(err.to_string())
    }
}

/// One generated variant as described by the service.
///
/// Field names match the wire format exactly (`res`, `url`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedImage {
    /// Resolution identifier the variant was produced for.
    #[serde(rename = "res")]
    pub resolution_label: String,
    /// Location of the generated file, usually root-relative.
    pub url: String,
}

/// Success payload of the upload endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    images: Vec<GeneratedImage>,
}

/// The multipart payload sent to the upload endpoint.
///
/// Built once per submission attempt and consumed by [`GenerationClient::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    file_name: String,
    media_type: String,
    image: Vec<u8>,
    resolutions: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request. `resolutions` is kept in the given order.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        image: Vec<u8>,
        resolutions: Vec<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            image,
            resolutions,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    #[must_use]
    pub fn resolutions(&self) -> &[String] {
        &self.resolutions
    }

    /// Value of the `resolutions` text field, e.g. `1920x1080,2560x1440`.
    #[must_use]
    pub fn resolutions_field(&self) -> String {
        self.resolutions.join(RESOLUTION_SEPARATOR)
    }

    /// Serializes the request into its two-field multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Transport`] if the media type is not a valid MIME string.
    pub fn into_form(self) -> GenerateResult<Form> {
        let resolutions = self.resolutions_field();
        let image = Part::bytes(self.image)
            .file_name(self.file_name)
            .mime_str(&self.media_type)?;

        Ok(Form::new()
            .part(IMAGE_FIELD, image)
            .text(RESOLUTIONS_FIELD, resolutions))
    }
}

/// Decodes the upload endpoint response.
///
/// A non-success status is a failure regardless of the body.
///
/// # Errors
///
/// Returns [`GenerateError::Status`] for non-2xx statuses and
/// [`GenerateError::Decode`] when the body is not the expected JSON.
pub fn decode_response(status: StatusCode, body: &[u8]) -> GenerateResult<Vec<GeneratedImage>> {
    if !status.is_success() {
        return Err(GenerateError::Status(status.as_u16()));
    }

    let response: GenerationResponse =
        serde_json::from_slice(body).map_err(|e| GenerateError::Decode(e.to_string()))?;
    Ok(response.images)
}

/// Resolved service locations.
#[derive(Debug, Clone)]
struct Endpoint {
    base: Url,
    upload: Url,
    health: Url,
}

impl Endpoint {
    fn from_config(config: &ServiceConfig) -> GenerateResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| GenerateError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| GenerateError::InvalidUrl(format!("{path}: {e}")))
        };
        let upload = join(&config.upload_path)?;
        let health = join(&config.health_path)?;
        Ok(Self {
            base,
            upload,
            health,
        })
    }
}

/// HTTP client bound to one generation service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl GenerationClient {
    /// Builds a client for the service described by `config`.
    ///
    /// No request timeout is set: a hung upload keeps the caller waiting until
    /// the transport gives up.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URLs cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn new(config: &ServiceConfig) -> GenerateResult<Self> {
        let endpoint = Endpoint::from_config(config)?;
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("WallGen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Base URL of the service.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.endpoint.base
    }

    /// URL the upload request is sent to.
    #[must_use]
    pub fn upload_url(&self) -> &Url {
        &self.endpoint.upload
    }

    /// Resolves a result URL (often root-relative) against the service base.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidUrl`] if the joined URL is invalid.
    pub fn resolve(&self, url: &str) -> GenerateResult<Url> {
        self.endpoint
            .base
            .join(url)
            .map_err(|e| GenerateError::InvalidUrl(format!("{url}: {e}")))
    }

    /// Uploads the image and returns the generated variants in server order.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or malformed body.
    pub async fn generate(&self, request: GenerationRequest) -> GenerateResult<Vec<GeneratedImage>> {
        tracing::info!(
            file = request.file_name(),
            bytes = request.image().len(),
            resolutions = %request.resolutions_field(),
            "uploading image for generation"
        );

        let form = request.into_form()?;
        let response = self
            .http
            .post(self.endpoint.upload.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let images = decode_response(status, &body)?;

        tracing::info!(count = images.len(), "generation completed");
        Ok(images)
    }

    /// Probes the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or answers with a non-success status.
    pub async fn check_health(&self) -> GenerateResult<()> {
        let response = self.http.get(self.endpoint.health.clone()).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(GenerateError::Status(response.status().as_u16()))
        }
    }

    /// Fetches a generated file fully into memory (used for previews).
    ///
    /// # Errors
    ///
    /// Any transport failure or non-success status.
    pub async fn fetch_bytes(&self, url: &str) -> GenerateResult<Vec<u8>> {
        let url = self.resolve(url)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Streams a generated file to `destination`.
    ///
    /// `progress_callback` receives values in `0.0..=1.0` when the server
    /// announces a content length. Returns the number of bytes written.
    /// A partially written file is removed on failure.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or local write failure.
    pub async fn download_to(
        &self,
        url: &str,
        destination: &Path,
        mut progress_callback: impl FnMut(f32) + Send,
    ) -> GenerateResult<u64> {
        use futures_util::StreamExt;
        use tokio::io::AsyncWriteExt;

        let url = self.resolve(url)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status().as_u16()));
        }

        let total_size = response.content_length().unwrap_or(0);

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GenerateError::Io(e.to_string()))?;
        }

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| GenerateError::Io(e.to_string()))?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    drop(file);
                    discard_partial(destination).await;
                    return Err(e.into());
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                drop(file);
                discard_partial(destination).await;
                return Err(GenerateError::Io(e.to_string()));
            }

            downloaded += chunk.len() as u64;

            if total_size > 0 {
                // f64 to f32 truncation is fine for a 0.0-1.0 progress value
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                let progress = (downloaded as f64 / total_size as f64) as f32;
                progress_callback(progress);
            }
        }

        file.flush()
            .await
            .map_err(|e| GenerateError::Io(e.to_string()))?;

        Ok(downloaded)
    }
}

async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::debug!(path = %path.display(), error = %e, "could not remove partial download");
    }
}

/// Suggests a local file name for a result URL (its last path segment).
#[must_use]
pub fn suggested_file_name(url: &str, fallback: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    without_query
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map_or_else(|| fallback.to_string(), str::to_string)
}

/// Joins a directory and a suggested file name.
#[must_use]
pub fn default_download_path(directory: &Path, url: &str, fallback: &str) -> PathBuf {
    directory.join(suggested_file_name(url, fallback))
}
