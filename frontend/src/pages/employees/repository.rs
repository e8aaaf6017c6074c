use crate::api::{ApiClient, ApiError, EmployeeSummary};

pub const MISSING_SYSTEM_ID: &str = "Error: Cannot find system ID for employee.";
pub const DEACTIVATED: &str = "Employee deactivated successfully";

/// Deactivates by system id. Rows without one are rejected before any
/// request is made.
pub async fn deactivate_employee(api: &ApiClient, employee: &EmployeeSummary) -> Result<(), ApiError> {
    let id = employee
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation(MISSING_SYSTEM_ID))?;
    api.deactivate_employee(id).await?;
    log::info!("deactivated employee {}", employee.employee_id);
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::admin_session;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn missing_id_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE);
                then.status(200);
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"), admin_session());
        let employee = EmployeeSummary {
            employee_id: "OIACGRHO20240001".into(),
            ..EmployeeSummary::default()
        };
        let err = deactivate_employee(&api, &employee).await.unwrap_err();
        assert_eq!(err.error, MISSING_SYSTEM_ID);
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn deactivates_by_system_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/api/auth/employee/42/delete")
                    .header("authorization", "Bearer test-token");
                then.status(200).json_body(serde_json::json!({"message": "ok"}));
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"), admin_session());
        let employee = EmployeeSummary {
            id: Some("42".into()),
            employee_id: "OIACGRHO20240001".into(),
            ..EmployeeSummary::default()
        };
        deactivate_employee(&api, &employee).await.unwrap();
        mock.assert_async().await;
    }
}
