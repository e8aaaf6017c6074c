use leptos::*;

use crate::{
    api::ReportPeriod,
    utils::time::{current_period, month_name, selectable_years},
};

const SELECT_CLASS: &str =
    "rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:border-action-primary-bg focus:outline-none";

/// Month and year pickers writing into one period signal. With `year_only`
/// the month picker is hidden.
#[component]
pub fn PeriodSelector(
    period: RwSignal<ReportPeriod>,
    #[prop(optional, into)] year_only: MaybeSignal<bool>,
) -> impl IntoView {
    let years = selectable_years(current_period().year);

    let on_month = move |ev| {
        if let Ok(month) = event_target_value(&ev).parse::<u32>() {
            period.update(|p| p.month = month);
        }
    };
    let on_year = move |ev| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            period.update(|p| p.year = year);
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <Show when=move || !year_only.get()>
                <label class="sr-only" for="period-month">{"Month"}</label>
                <select id="period-month" class=SELECT_CLASS on:change=on_month>
                    {(1..=12u32)
                        .map(|month| {
                            view! {
                                <option
                                    value=month.to_string()
                                    selected=move || period.with(|p| p.month == month)
                                >
                                    {month_name(month)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </Show>
            <label class="sr-only" for="period-year">{"Year"}</label>
            <select id="period-year" class=SELECT_CLASS on:change=on_year>
                {years
                    .iter()
                    .map(|&year| {
                        view! {
                            <option value=year.to_string() selected=move || period.with(|p| p.year == year)>
                                {year}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_months_and_marks_selection() {
        let html = render_to_string(|| {
            let period = create_rw_signal(ReportPeriod { month: 3, year: current_period().year });
            view! { <PeriodSelector period=period/> }
        });
        assert!(html.contains("January"));
        assert!(html.contains("December"));
        assert!(html.contains("id=\"period-year\""));
        assert!(html.contains("selected"));
    }

    #[test]
    fn year_only_hides_month_picker() {
        let html = render_to_string(|| {
            let period = create_rw_signal(current_period());
            view! { <PeriodSelector period=period year_only=true/> }
        });
        assert!(!html.contains("id=\"period-month\""));
        assert!(html.contains("id=\"period-year\""));
    }
}
