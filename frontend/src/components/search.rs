use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{config, state::auth::use_session, utils::navigation::use_navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
    pub admin_only: bool,
}

/// Every page reachable from the shell. Drives both the sidebar and search.
pub const NAV_INDEX: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        path: "/dashboard",
        keywords: &["home", "overview"],
        admin_only: false,
    },
    NavEntry {
        label: "My Profile",
        path: "/profile",
        keywords: &["account", "documents", "avatar", "bank"],
        admin_only: false,
    },
    NavEntry {
        label: "Attendance",
        path: "/attendance",
        keywords: &["check in", "check out", "hours"],
        admin_only: false,
    },
    NavEntry {
        label: "Leave",
        path: "/leave",
        keywords: &["time off", "holiday", "vacation", "sick"],
        admin_only: false,
    },
    NavEntry {
        label: "Payroll",
        path: "/payroll",
        keywords: &["salary", "payslip", "wage"],
        admin_only: false,
    },
    NavEntry {
        label: "Change Password",
        path: "/change-password",
        keywords: &["security", "password"],
        admin_only: false,
    },
    NavEntry {
        label: "Employees",
        path: "/employees",
        keywords: &["staff", "directory", "people"],
        admin_only: true,
    },
    NavEntry {
        label: "Add Employee",
        path: "/create-employee",
        keywords: &["new hire", "onboard", "create"],
        admin_only: true,
    },
    NavEntry {
        label: "Approvals",
        path: "/approvals",
        keywords: &["leave requests", "pending", "approve"],
        admin_only: true,
    },
    NavEntry {
        label: "Reports",
        path: "/reports",
        keywords: &["export", "csv", "analytics"],
        admin_only: true,
    },
];

/// Entries visible to the current user.
pub fn visible_entries(is_admin: bool) -> impl Iterator<Item = &'static NavEntry> {
    NAV_INDEX
        .iter()
        .filter(move |entry| is_admin || !entry.admin_only)
}

/// Case-insensitive match on label and keywords. Blank queries match nothing.
pub fn search_index(query: &str, is_admin: bool) -> Vec<&'static NavEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    visible_entries(is_admin)
        .filter(|entry| {
            entry.label.to_lowercase().contains(&needle)
                || entry.keywords.iter().any(|k| k.contains(&needle))
        })
        .collect()
}

/// Restartable delay. Each [`Debounce::schedule`] supersedes the previous
/// one, so only the run scheduled last ever fires.
#[derive(Clone, Default)]
pub struct Debounce {
    generation: Rc<Cell<u64>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    /// Wraps `run` so it only executes if nothing was armed after it.
    pub fn arm(&self, run: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        let generation = self.generation.clone();
        move || {
            if generation.get() == ticket {
                run();
            }
        }
    }

    pub fn schedule(&self, delay_ms: u32, run: impl FnOnce() + 'static) {
        let guarded = self.arm(run);
        if let Some(previous) = self.pending.borrow_mut().replace(Timeout::new(delay_ms, guarded)) {
            previous.cancel();
        }
    }

    /// Drops the pending run, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
        if let Some(timeout) = self.pending.borrow_mut().take() {
            timeout.cancel();
        }
    }
}

#[component]
pub fn SearchBox() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let query = create_rw_signal(String::new());
    let results = create_rw_signal(Vec::<&'static NavEntry>::new());
    let debounce = Debounce::default();

    {
        let debounce = debounce.clone();
        on_cleanup(move || debounce.cancel());
    }

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        let is_admin = session.is_admin();
        debounce.schedule(config::current().search_debounce_ms, move || {
            results.set(search_index(&value, is_admin));
        });
    };

    let open = Callback::new(move |path: &'static str| {
        query.set(String::new());
        results.set(Vec::new());
        navigator.go(path);
    });

    view! {
        <div class="relative w-full max-w-xs">
            <input
                type="search"
                aria-label="Search"
                placeholder="Search pages..."
                class="w-full rounded-md border border-border bg-surface px-3 py-1.5 text-sm text-fg placeholder-fg-muted focus:outline-none focus:border-action-primary-bg"
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || !results.get().is_empty()>
                <ul class="absolute z-40 mt-1 w-full rounded-md border border-border bg-surface-elevated shadow-lg">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="block w-full text-left px-3 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                            on:click=move |_| open.call(entry.path)
                                        >
                                            {entry.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: Vec<&NavEntry>) -> Vec<&'static str> {
        entries.into_iter().map(|e| e.path).collect()
    }

    #[test]
    fn search_is_case_insensitive_on_labels() {
        assert_eq!(paths(search_index("PAY", false)), vec!["/payroll"]);
        assert_eq!(paths(search_index("  dash ", false)), vec!["/dashboard"]);
    }

    #[test]
    fn search_matches_keywords() {
        assert_eq!(paths(search_index("time off", false)), vec!["/leave"]);
        assert_eq!(paths(search_index("salary", false)), vec!["/payroll"]);
    }

    #[test]
    fn admin_entries_hidden_from_non_admins() {
        assert!(search_index("employee", false).is_empty());
        assert_eq!(
            paths(search_index("employee", true)),
            vec!["/employees", "/create-employee"]
        );
        assert!(search_index("reports", false).is_empty());
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(search_index("   ", true).is_empty());
    }

    #[test]
    fn superseded_keystroke_never_writes_results() {
        let runtime = create_runtime();
        let results = create_rw_signal(Vec::<&'static NavEntry>::new());
        let debounce = Debounce::default();

        let first = debounce.arm(move || results.set(search_index("pay", false)));
        let second = debounce.arm(move || results.set(search_index("leave", false)));
        first();
        assert!(results.get().is_empty());
        second();
        assert_eq!(paths(results.get()), vec!["/leave"]);
        runtime.dispose();
    }

    #[test]
    fn cancel_discards_the_armed_run() {
        let debounce = Debounce::default();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let run = debounce.arm(move || flag.set(true));
        debounce.cancel();
        run();
        assert!(!fired.get());
    }

    #[test]
    fn visible_entries_split_by_role() {
        assert_eq!(visible_entries(false).count(), 6);
        assert_eq!(visible_entries(true).count(), NAV_INDEX.len());
    }
}
