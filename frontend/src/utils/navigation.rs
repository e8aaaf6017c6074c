use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

/// Replace-navigation that works inside and outside a `<Router>`.
///
/// Must be created during component setup: the router context is looked up
/// once, at construction.
#[derive(Clone)]
pub struct Navigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl Navigator {
    pub fn new() -> Self {
        if use_context::<RouterContext>().is_some() {
            let navigate = use_navigate();
            Self {
                navigate: Rc::new(move |path: &str| {
                    navigate(
                        path,
                        NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        },
                    )
                }),
            }
        } else {
            Self {
                navigate: Rc::new(replace_location),
            }
        }
    }

    pub fn from_fn(navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
        }
    }

    pub fn go(&self, path: &str) {
        log::debug!("navigating to {}", path);
        (self.navigate)(path);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn replace_location(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(path);
    }
}

pub fn use_navigator() -> Navigator {
    Navigator::new()
}

/// Current browser path, if any.
pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
