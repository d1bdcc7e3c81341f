use crate::config::{Config, ReportConfig};
use crate::error::{ApiError, Error};
use crate::report::{GenerateCampaignReportResponse, ReportRequest, ReportRow};
use log::{debug, info};
use reqwest::{Client, Url};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReportApi: Send + Sync + 'static {
    /// Generates a campaign report for the given publisher.
    /// # Arguments
    /// * `publisher_id` - The publisher whose campaigns are reported, e.g. "pub-1234".
    /// * `request` - The date range, dimensions and metrics of the report.
    /// # Returns
    /// A Result containing either the report rows in API order or an ApiError.
    async fn generate_campaign_report(
        &self,
        publisher_id: &str,
        request: &ReportRequest,
    ) -> Result<Vec<ReportRow>, ApiError>;
}

#[derive(Clone)]
pub struct AdMobClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AdMobClient {
    pub fn new(config: &Config) -> Self {
        AdMobClient {
            client: Client::new(),
            base_url: config.admob_api_url.to_string(),
            token: config.access_token.to_string(),
        }
    }

    fn campaign_report_url(&self, publisher_id: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::UrlParsingFailed(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(&["accounts", publisher_id, "campaignReport:generate"]);

        Ok(url)
    }
}

#[async_trait::async_trait]
impl ReportApi for AdMobClient {
    async fn generate_campaign_report(
        &self,
        publisher_id: &str,
        request: &ReportRequest,
    ) -> Result<Vec<ReportRow>, ApiError> {
        let url = self.campaign_report_url(publisher_id)?;
        debug!("requesting campaign report from {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateCampaignReportResponse>()
            .await?;

        Ok(response.into_rows())
    }
}

/// Fetches the campaign report described by `report` for `publisher_id`.
///
/// An empty report is returned as an empty vector. API failures are passed
/// through as [`Error::FetchFailed`].
pub async fn fetch_campaign_report(
    api: &dyn ReportApi,
    publisher_id: &str,
    report: &ReportConfig,
) -> Result<Vec<ReportRow>, Error> {
    if publisher_id.trim().is_empty() {
        return Err(Error::EmptyPublisherId);
    }

    let request = ReportRequest::from(report);
    let rows = api
        .generate_campaign_report(publisher_id, &request)
        .await
        .map_err(Error::FetchFailed)?;

    info!(
        "fetched {} campaign report rows for {}",
        rows.len(),
        publisher_id
    );

    Ok(rows)
}
