use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{ReportData, ReportKind, ReportPeriod},
};

impl ApiClient {
    pub async fn get_report(
        &self,
        kind: ReportKind,
        period: ReportPeriod,
    ) -> Result<ReportData, ApiError> {
        let query = kind.query(period);
        self.call(
            Method::GET,
            &format!("/auth/reports/{}", kind.as_str()),
            |req| req.query(&query),
            &format!("Failed to load {} report", kind.as_str()),
        )
        .await
    }

    pub async fn download_report_csv(
        &self,
        kind: ReportKind,
        period: ReportPeriod,
    ) -> Result<Vec<u8>, ApiError> {
        let query = kind.query(period);
        self.call_bytes(
            Method::GET,
            &format!("/auth/reports/{}/csv", kind.as_str()),
            |req| req.query(&query),
            "Failed to download report",
        )
        .await
    }
}
