//! Object-storage client for image uploads (Supabase Storage buckets).
//!
//! The client is constructed once at process start from environment
//! variables and passed by reference to whoever needs it; there is no
//! implicit global instance. Upload failures are surfaced loudly so the
//! caller can abort the enclosing request.

use uuid::Uuid;

/// Errors from the object-storage service.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Transport-level failure talking to the storage service.
    #[error("storage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The storage service rejected the upload.
    #[error("storage upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Credentials and bucket name for the storage service.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Service key used as a bearer token.
    pub key: String,
    /// Bucket that receives the uploads.
    pub bucket: String,
}

impl StorageConfig {
    /// Load from `SUPABASE_URL` / `SUPABASE_KEY` / `SUPABASE_BUCKET`.
    ///
    /// Returns `None` when any of the three is unset; callers decide how to
    /// surface the missing configuration.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok()?;
        let key = std::env::var("SUPABASE_KEY").ok()?;
        let bucket = std::env::var("SUPABASE_BUCKET").ok()?;
        Some(Self { url, key, bucket })
    }
}

/// Client for the bucket's object endpoints.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Upload a file into the bucket and return its public URL.
    ///
    /// Object names are prefixed with a fresh UUID so two uploads of the
    /// same filename never collide.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> Result<String, StorageError> {
        let object_path = unique_object_path(filename);
        let base = self.config.url.trim_end_matches('/');
        let endpoint = format!(
            "{base}/storage/v1/object/{}/{object_path}",
            self.config.bucket
        );

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.config.key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected { status, body });
        }

        Ok(format!(
            "{base}/storage/v1/object/public/{}/{object_path}",
            self.config.bucket
        ))
    }
}

/// Build a collision-free object path for an uploaded file.
fn unique_object_path(filename: &str) -> String {
    format!("public/{}-{filename}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_paths_are_unique_per_upload() {
        let a = unique_object_path("campana.png");
        let b = unique_object_path("campana.png");
        assert_ne!(a, b);
        assert!(a.starts_with("public/"));
        assert!(a.ends_with("-campana.png"));
    }
}
