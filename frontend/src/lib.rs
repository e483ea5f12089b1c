//! Student iEnabler frontend.
//!
//! - `web::route`: route definitions and guard rules
//! - `web::router`: history-backed router service
//! - `session`: the root-owned authentication flag
//! - `config`: embedded portal content
//! - `components`: login page, dashboard and shared pieces

#[macro_use]
mod log;

mod config;
mod session;
mod components {
    pub mod dashboard;
    pub mod header;
    pub(crate) mod icons;
    pub mod login;
}

use crate::components::dashboard::DashboardPage;
use crate::components::icons::AlertCircle;
use crate::components::login::LoginPage;
use crate::config::provide_config;
use crate::session::{SessionContext, use_session};

use ienabler_shared::PortalConfig;
use leptos::prelude::*;

// Thin wrappers over browser APIs.
pub(crate) mod web {
    mod listener;
    pub mod route;
    pub mod router;
    mod timer;

    pub use listener::DocumentListener;
    pub use timer::Timeout;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

#[component]
fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-ug-blue">"404"</h1>
                <p class="text-xl mt-4 text-gray-700">"Page not found"</p>
                <button
                    on:click=move |_| router.navigate(AppRoute::Login.to_path())
                    class="mt-6 px-4 py-2 text-sm font-medium rounded bg-blue-600 hover:bg-blue-700 text-white"
                >
                    "Back to the portal"
                </button>
            </div>
        </div>
    }
}

fn route_matcher(route: AppRoute) -> AnyView {
    let session = use_session();

    match route {
        AppRoute::Login => view! { <LoginPage on_login=move |_| session.login() /> }.into_any(),
        AppRoute::Dashboard => {
            view! { <DashboardPage on_logout=move |_| session.logout() /> }.into_any()
        }
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100 p-4">
            <div class="max-w-md bg-white border shadow-md border-red-300 p-6 text-center">
                <AlertCircle attr:class="w-8 h-8 mx-auto text-red-500" />
                <h1 class="mt-2 text-lg font-semibold text-gray-800">"The portal could not start"</h1>
                <p class="mt-2 text-sm text-red-600">{message}</p>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = match PortalConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log_error!("[App] {}", e);
            return view! { <ConfigErrorPage message=e.to_string() /> }.into_any();
        }
    };
    log_info!(
        "[App] {} loaded ({} sidebar items).",
        config.portal_name,
        config.sidebar.len()
    );
    provide_config(config);

    // The session flag lives here, above every route.
    let session = SessionContext::new();
    provide_context(session);

    view! {
        <Router is_authenticated=session.is_authenticated_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
    .into_any()
}
