use crate::report::{Dimension, Metric};
use chrono::NaiveDate;
use clap::Args as ClapArgs;
use std::fmt;

const DEFAULT_PUBLISHER_ID: &str = "pub-XXXXXXXXXXXXXXXX";
const DEFAULT_ADMOB_API_URL: &str = "https://admob.googleapis.com/v1beta";
const DEFAULT_DRIVE_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3";
const CSV_OUTPUT_PATH: &str = "/tmp/campaign_report.csv";

#[derive(ClapArgs, Clone)]
pub struct Config {
    /// Publisher id in the form "pub-XXXXXXXXXXXXXXXX"
    #[arg(long, default_value = DEFAULT_PUBLISHER_ID, env = "PUBLISHER_ID")]
    pub(crate) publisher_id: String,

    #[arg(long, default_value = DEFAULT_ADMOB_API_URL, env = "ADMOB_API_URL")]
    pub(crate) admob_api_url: String,

    /// OAuth access token with the admob.readonly scope
    #[arg(long, env = "ACCESS_TOKEN")]
    pub(crate) access_token: String,

    /// OAuth access token with the drive.file scope, defaults to --access-token
    #[arg(long, env = "DRIVE_ACCESS_TOKEN")]
    pub(crate) drive_access_token: Option<String>,

    #[arg(long, default_value = DEFAULT_DRIVE_UPLOAD_URL, env = "DRIVE_UPLOAD_URL")]
    pub(crate) drive_upload_url: String,

    #[arg(long, default_value = CSV_OUTPUT_PATH, env = "CSV_OUTPUT_PATH")]
    pub(crate) csv_output_path: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("publisher_id", &self.publisher_id)
            .field("admob_api_url", &self.admob_api_url)
            .field("access_token", &"<redacted>")
            .field(
                "drive_access_token",
                &self.drive_access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("drive_upload_url", &self.drive_upload_url)
            .field("csv_output_path", &self.csv_output_path)
            .finish()
    }
}

impl Config {
    pub fn drive_token(&self) -> &str {
        self.drive_access_token
            .as_deref()
            .unwrap_or(&self.access_token)
    }
}

/// What the campaign report covers.
///
/// The default is December 2023 grouped by campaign, country and ad, with
/// impressions, installs and clicks as metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            start_date: NaiveDate::from_ymd_opt(2023, 12, 1).expect("2023-12-01 is a valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).expect("2023-12-31 is a valid date"),
            dimensions: vec![Dimension::CampaignName, Dimension::Country, Dimension::AdName],
            metrics: vec![Metric::Impressions, Metric::Installs, Metric::Clicks],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_config() {
        let report = ReportConfig::default();
        assert_eq!(report.start_date.to_string(), "2023-12-01");
        assert_eq!(report.end_date.to_string(), "2023-12-31");
        assert!(report.start_date < report.end_date);
        assert_eq!(
            report.dimensions,
            vec![Dimension::CampaignName, Dimension::Country, Dimension::AdName]
        );
        assert_eq!(
            report.metrics,
            vec![Metric::Impressions, Metric::Installs, Metric::Clicks]
        );
    }

    #[test]
    fn test_drive_token_falls_back_to_access_token() {
        let mut config = Config {
            publisher_id: "pub-1".to_string(),
            admob_api_url: "dummy_url".to_string(),
            access_token: "shared_token".to_string(),
            drive_access_token: None,
            drive_upload_url: "dummy_url".to_string(),
            csv_output_path: "dummy_path".to_string(),
        };
        assert_eq!(config.drive_token(), "shared_token");

        config.drive_access_token = Some("drive_token".to_string());
        assert_eq!(config.drive_token(), "drive_token");
    }

    #[test]
    fn test_debug_redacts_access_tokens() {
        let config = Config {
            publisher_id: "pub-1".to_string(),
            admob_api_url: "dummy_url".to_string(),
            access_token: "secret_admob_token".to_string(),
            drive_access_token: Some("secret_drive_token".to_string()),
            drive_upload_url: "dummy_url".to_string(),
            csv_output_path: "dummy_path".to_string(),
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret_admob_token"));
        assert!(!debug.contains("secret_drive_token"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("pub-1"));
    }
}
