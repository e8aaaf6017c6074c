use crate::{
    api::{ApiClient, ApiError, ReportKind, ReportPeriod},
    utils::download::trigger_csv_download,
};

pub const DOWNLOADED: &str = "Report downloaded successfully!";

/// Fetches the CSV variant of a report and hands it to the browser. Returns
/// the file name used.
pub async fn download_report(
    api: &ApiClient,
    kind: ReportKind,
    period: ReportPeriod,
) -> Result<String, ApiError> {
    let bytes = api.download_report_csv(kind, period).await?;
    let file_name = kind.csv_file_name(period);
    trigger_csv_download(&file_name, &bytes).map_err(ApiError::unknown)?;
    log::info!("downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(file_name)
}
