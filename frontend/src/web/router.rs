//! Router service.
//!
//! Owns every touch of `window.history`. Navigation always runs
//! "resolve path -> guard against the session flag -> update history ->
//! publish route", whether it comes from code, from back/forward, or from the
//! session flag changing underneath the current page.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn write_history(path: &str, use_push: bool) {
    if use_push {
        push_history_state(path);
    } else {
        replace_history_state(path);
    }
}

/// Router service, shared through context.
///
/// The session flag is injected as a signal so the router never depends on
/// how the session is stored.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigates to `path`, pushing a history entry.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let resolved = target.guard(self.is_authenticated.get_untracked());
        if resolved != target {
            log_info!("[Router] {} is not reachable now, showing {}.", target, resolved);
        }

        write_history(resolved.to_path(), use_push);
        self.set_route.set(resolved);
    }

    /// Applies the guard to the page the browser opened on.
    fn resolve_initial(&self) {
        let initial = self.current_route.get_untracked();
        self.navigate_to_route(initial, false);
    }

    /// Back/forward buttons.
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The router lives as long as the page.
        closure.forget();
    }

    /// Re-runs the guard whenever the session flag flips.
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            let resolved = route.guard(is_auth);

            if resolved != route {
                log_info!(
                    "[Router] Session changed (authenticated: {}), redirecting to {}.",
                    is_auth,
                    resolved
                );
                push_history_state(resolved.to_path());
                router.set_route.set(resolved);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.resolve_initial();
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

/// Provides the router context; place at the root of the app.
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders the view for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps a route to its view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
