use leptos::*;

use crate::{
    api::{use_api, AdminDashboard, EmployeeDashboard},
    components::{
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader},
    },
    pages::dashboard::{
        components::{admin::AdminOverview, employee::EmployeeOverview},
        utils::greeting,
    },
    state::request_gate::PageData,
};

#[component]
fn AdminDashboardView() -> impl IntoView {
    let api = use_api();
    let data = PageData::<AdminDashboard>::new();
    {
        let data = data.clone();
        create_effect(move |_| {
            let api = api.clone();
            data.load(async move { api.get_admin_dashboard().await });
        });
    }
    let loading = data.loading;
    let value = data.value;

    view! {
        <InlineErrorMessage error=data.error/>
        {move || match value.get() {
            Some(dashboard) => view! { <AdminOverview data=dashboard/> }.into_view(),
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            None => ().into_view(),
        }}
    }
}

#[component]
fn EmployeeDashboardView() -> impl IntoView {
    let api = use_api();
    let data = PageData::<EmployeeDashboard>::new();
    {
        let data = data.clone();
        create_effect(move |_| {
            let api = api.clone();
            data.load(async move { api.get_employee_dashboard().await });
        });
    }
    let loading = data.loading;
    let value = data.value;

    view! {
        <InlineErrorMessage error=data.error/>
        {move || match value.get() {
            Some(dashboard) => view! { <EmployeeOverview data=dashboard/> }.into_view(),
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            None => ().into_view(),
        }}
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_api().session().clone();
    let info = session.user_info();
    let subtitle = format!("Employee ID: {}", info.employee_id);

    view! {
        <PageHeader title=greeting(&info.full_name) subtitle=subtitle/>
        {if session.is_admin() {
            view! { <AdminDashboardView/> }.into_view()
        } else {
            view! { <EmployeeDashboardView/> }.into_view()
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_session, employee_session, provide_api},
        ssr::render_to_string,
    };

    #[test]
    fn greets_the_signed_in_user() {
        let html = render_to_string(|| {
            leptos_meta::provide_meta_context();
            provide_api(employee_session(), "http://127.0.0.1:9");
            view! { <DashboardPage/> }
        });
        assert!(html.contains("Welcome back, Jane Doe!"));
        assert!(html.contains("Employee ID: OIJADO20250001"));
    }

    #[test]
    fn nothing_is_fetched_during_server_render() {
        let server = httpmock::MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/api/auth/dashboard/admin");
            then.status(200).json_body(serde_json::json!({}));
        });
        let base = server.url("/api");
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            provide_api(admin_session(), &base);
            view! { <DashboardPage/> }
        });
        assert!(html.contains("Welcome back"));
        mock.assert_hits(0);
    }
}
