mod config;
mod drive;
mod error;
mod exporter;
mod report;
mod report_api;
mod runner;
#[cfg(test)]
mod test_server;

use clap::Parser;
use config::{Config, ReportConfig};
use drive::DriveClient;
use log::{error, info};
use report_api::AdMobClient;

/// Generates an AdMob campaign report and uploads it to Google Drive as a spreadsheet.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::init();

    let report = ReportConfig::default();
    let report_api = AdMobClient::new(&args.config);
    let drive_api = DriveClient::new(&args.config);

    match runner::generate_and_upload_campaign_report(&args.config, &report, &report_api, &drive_api)
        .await
    {
        Ok(Some(file_id)) => info!("campaign report uploaded as {}", file_id),
        Ok(None) => info!("campaign report was empty, nothing uploaded"),
        Err(err) => {
            error!("failed to generate and upload campaign report: {}", err);
            std::process::exit(1);
        }
    }
}
