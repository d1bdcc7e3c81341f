use crate::config::Config;
use crate::error::{ApiError, Error};
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Makes Drive convert the upload into a native Google Sheets document.
pub const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub mime_type: String,
}

#[derive(Deserialize)]
struct CreatedFile {
    id: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DriveApi: Send + Sync + 'static {
    /// Creates a new file in Drive.
    /// # Arguments
    /// * `metadata` - Name and target MIME type of the new file.
    /// * `media_type` - MIME type of the uploaded bytes.
    /// * `media` - The file content.
    /// # Returns
    /// A Result containing either the id of the created file or an ApiError.
    async fn create_file(
        &self,
        metadata: &FileMetadata,
        media_type: &str,
        media: Vec<u8>,
    ) -> Result<String, ApiError>;
}

#[derive(Clone)]
pub struct DriveClient {
    client: Client,
    upload_url: String,
    token: String,
}

impl DriveClient {
    pub fn new(config: &Config) -> Self {
        DriveClient {
            client: Client::new(),
            upload_url: config.drive_upload_url.to_string(),
            token: config.drive_token().to_string(),
        }
    }

    fn resumable_upload_url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.upload_url)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::UrlParsingFailed(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("files");
        url.query_pairs_mut()
            .append_pair("uploadType", "resumable")
            .append_pair("fields", "id");

        Ok(url)
    }
}

#[async_trait::async_trait]
impl DriveApi for DriveClient {
    async fn create_file(
        &self,
        metadata: &FileMetadata,
        media_type: &str,
        media: Vec<u8>,
    ) -> Result<String, ApiError> {
        let url = self.resumable_upload_url()?;
        debug!("starting resumable upload at {}", url);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .header("X-Upload-Content-Type", media_type)
            .header("X-Upload-Content-Length", media.len())
            .json(metadata)
            .send()
            .await?
            .error_for_status()?;

        let session_url = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingUploadSession)?;
        let session_url = Url::parse(session_url)?;
        debug!("uploading {} bytes to session {}", media.len(), session_url);

        let created = self
            .client
            .put(session_url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, media_type)
            .body(media)
            .send()
            .await?
            .error_for_status()?
            .json::<CreatedFile>()
            .await?;

        Ok(created.id)
    }
}

/// Builds the metadata for a spreadsheet upload, named uniquely after `now`.
pub fn spreadsheet_metadata(now: DateTime<Utc>) -> FileMetadata {
    FileMetadata {
        name: format!(
            "campaign report csv upload {}.{:06}",
            now.timestamp(),
            now.timestamp_subsec_micros()
        ),
        mime_type: SPREADSHEET_MIME_TYPE.to_string(),
    }
}

/// Uploads the CSV file at `csv_output_path` as a new Google Sheets document.
///
/// Every call creates a new document. Returns the id of the created document.
pub async fn upload_csv_as_spreadsheet(
    api: &dyn DriveApi,
    csv_output_path: &Path,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    let media = fs::read(csv_output_path).map_err(|source| Error::ReadUploadFile {
        path: csv_output_path.display().to_string(),
        source,
    })?;

    let metadata = spreadsheet_metadata(now);
    let file_id = api
        .create_file(&metadata, CSV_MIME_TYPE, media)
        .await
        .map_err(Error::UploadFailed)?;

    info!("File with ID: \"{}\" has been uploaded.", file_id);

    Ok(file_id)
}
