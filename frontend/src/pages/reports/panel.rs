use leptos::*;

use crate::{
    api::{use_api, ReportData, ReportKind},
    components::{
        alert::{AlertBanner, MessageState},
        cards::StatCard,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader},
        period::PeriodSelector,
    },
    pages::reports::repository::{download_report, DOWNLOADED},
    state::request_gate::PageData,
    utils::time::current_period,
};

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-fg-muted hover:text-fg";
const ACTIVE_TAB_CLASS: &str = "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg";

#[component]
fn SummaryGrid(figures: Vec<(String, String)>) -> impl IntoView {
    if figures.is_empty() {
        return view! { <EmptyState title="No Data Available" description="Select a different period"/> }
            .into_view();
    }
    view! {
        <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
            {figures
                .into_iter()
                .map(|(label, value)| view! { <StatCard label=label value=value/> })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let api = use_api();
    let kind = create_rw_signal(ReportKind::Attendance);
    let period = create_rw_signal(current_period());
    let messages = create_rw_signal(MessageState::default());
    let report = PageData::<ReportData>::new();

    {
        let api = api.clone();
        let report = report.clone();
        create_effect(move |_| {
            let (kind, period) = (kind.get(), period.get());
            let api = api.clone();
            report.load(async move { api.get_report(kind, period).await });
        });
    }

    let download = create_action(move |_: &()| {
        let api = api.clone();
        let (kind, period) = (kind.get_untracked(), period.get_untracked());
        async move {
            match download_report(&api, kind, period).await {
                Ok(_) => messages.update(|m| m.set_success(DOWNLOADED)),
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let downloading = download.pending();

    let value = report.value;
    let loading = report.loading;

    view! {
        <PageHeader title="Reports & Analytics" subtitle="Company-wide attendance, leave and payroll figures"/>
        <AlertBanner messages=messages/>
        <div class="mb-4 flex flex-wrap items-end justify-between gap-4">
            <PeriodSelector period=period year_only=Signal::derive(move || !kind.get().uses_month())/>
            <Button variant=ButtonVariant::Secondary loading=downloading on:click=move |_| download.dispatch(())>
                {move || if downloading.get() { "Downloading..." } else { "Download CSV" }}
            </Button>
        </div>
        <div class="mb-6 flex gap-2 border-b border-border" role="tablist">
            {ReportKind::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if kind.get() == tab { ACTIVE_TAB_CLASS } else { TAB_CLASS }
                            on:click=move |_| kind.set(tab)
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <InlineErrorMessage error=report.error/>
        {move || match value.get() {
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            data => view! { <SummaryGrid figures=data.map(|d| d.summary_figures()).unwrap_or_default()/> }.into_view(),
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_session, provide_api},
        ssr::render_to_string,
    };

    #[test]
    fn renders_tabs_and_download() {
        let html = render_to_string(|| {
            leptos_meta::provide_meta_context();
            provide_api(admin_session(), "http://127.0.0.1:9");
            view! { <ReportsPage/> }
        });
        for tab in ["Attendance", "Leave", "Payroll"] {
            assert!(html.contains(tab), "missing tab {}", tab);
        }
        assert!(html.contains("Download CSV"));
        assert!(html.contains("id=\"period-month\""));
        assert!(html.contains("No Data Available"));
    }

    #[test]
    fn summary_figures_become_cards() {
        let html = render_to_string(|| {
            let data = ReportData(serde_json::json!({
                "summary": {"total_employees": 12, "attendance_rate": 91.5}
            }));
            view! { <SummaryGrid figures=data.summary_figures()/> }
        });
        assert!(html.contains("Attendance Rate"));
        assert!(html.contains("91.50"));
        assert!(html.contains("Total Employees"));
    }
}
