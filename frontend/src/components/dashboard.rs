mod profile_panel;
mod quick_actions;
mod sidebar;

use ienabler_shared::NavigationState;
use leptos::prelude::*;

use crate::components::header::PortalHeader;
use crate::components::icons::{Close, Menu};
use crate::config::use_config;

use profile_panel::ProfilePanel;
use quick_actions::{QuickActions, SectionDetail};
use sidebar::Sidebar;

#[component]
pub fn DashboardPage(
    /// Flips the session flag back; the router then shows the login page
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let nav = RwSignal::new(config.with_value(|c| NavigationState::new(&c.default_section)));
    let menu_open = Memo::new(move |_| nav.with(NavigationState::mobile_menu_open));

    view! {
        <div class="min-h-screen bg-gray-100">
            <PortalHeader compact=true>
                <button
                    on:click=move |_| nav.update(NavigationState::toggle_mobile_menu)
                    class="md:hidden p-2 rounded-md hover:bg-gray-100"
                >
                    {move || if menu_open.get() {
                        view! { <Close attr:class="w-5 h-5" /> }.into_any()
                    } else {
                        view! { <Menu attr:class="w-5 h-5" /> }.into_any()
                    }}
                </button>
            </PortalHeader>

            <div class="flex max-w-7xl mx-auto relative">
                // Mobile overlay
                <Show when=move || menu_open.get()>
                    <div
                        class="fixed inset-0 bg-black bg-opacity-50 z-40 md:hidden"
                        on:click=move |_| nav.update(NavigationState::close_mobile_menu)
                    ></div>
                </Show>

                <Sidebar nav=nav on_logout=on_logout />

                <div class="flex-1 p-4 sm:p-6 md:ml-0">
                    <div class="grid grid-cols-1 xl:grid-cols-3 gap-4 sm:gap-6">
                        <div class="xl:col-span-1 order-1">
                            <ProfilePanel />
                        </div>
                        <div class="xl:col-span-2 order-2">
                            <QuickActions />
                            <SectionDetail nav=nav />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
