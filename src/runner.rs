use crate::config::{Config, ReportConfig};
use crate::drive::{self, DriveApi};
use crate::error::Error;
use crate::exporter::{self, ExportOutcome};
use crate::report_api::{self, ReportApi};
use chrono::Utc;
use log::{debug, warn};
use std::path::Path;

/// Fetches the campaign report, saves it as CSV and uploads it to Drive.
///
/// Returns the id of the uploaded document, or `None` when the report was
/// empty and nothing was uploaded.
pub async fn generate_and_upload_campaign_report(
    config: &Config,
    report: &ReportConfig,
    report_api: &dyn ReportApi,
    drive_api: &dyn DriveApi,
) -> Result<Option<String>, Error> {
    let csv_output_path = Path::new(&config.csv_output_path);

    let rows = report_api::fetch_campaign_report(report_api, &config.publisher_id, report).await?;

    let outcome = exporter::save_to_csv(&rows, csv_output_path).map_err(|source| {
        Error::ExportFailed {
            path: config.csv_output_path.clone(),
            source,
        }
    })?;

    match outcome {
        ExportOutcome::Skipped => {
            warn!(
                "campaign report for {} is empty, skipping upload",
                config.publisher_id
            );
            return Ok(None);
        }
        ExportOutcome::Written { rows } => {
            debug!("uploading {} rows from {}", rows, csv_output_path.display())
        }
    }

    let file_id = drive::upload_csv_as_spreadsheet(drive_api, csv_output_path, Utc::now()).await?;

    Ok(Some(file_id))
}
