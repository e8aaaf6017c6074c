use leptos::*;

/// Single key figure, used on the dashboards and report summaries.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted truncate">{label}</dt>
                <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
                {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
            </div>
        </div>
    }
}

/// Titled card holding label/value rows.
#[component]
pub fn DetailCard(
    #[prop(into)] title: String,
    #[prop(into)] rows: MaybeSignal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <h3 class="text-lg leading-6 font-medium text-fg">{title}</h3>
                <dl class="mt-4 space-y-2">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="flex justify-between gap-4">
                                        <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                                        <dd class="text-sm text-fg text-right">{value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </dl>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_value_and_hint() {
        let html = render_to_string(|| {
            view! { <StatCard label="Total Employees" value="12".to_string() hint="active" /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("12"));
        assert!(html.contains("active"));
    }

    #[test]
    fn detail_card_renders_rows() {
        let html = render_to_string(|| {
            let rows = vec![
                ("Basic Salary".to_string(), "₹25,000".to_string()),
                ("HRA".to_string(), "₹12,500".to_string()),
            ];
            view! { <DetailCard title="Earnings" rows=rows /> }
        });
        assert!(html.contains("Earnings"));
        assert!(html.contains("Basic Salary"));
        assert!(html.contains("₹12,500"));
    }
}
