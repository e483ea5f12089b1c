//! Sidebar navigation panel.
//!
//! Renders the configured items, expands the registration group in place and
//! collapses every group on a pointer-down outside the panel.

use ienabler_shared::navigation::option_section;
use ienabler_shared::{NavigationState, SidebarItem};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::icons::{ChevronDown, ChevronRight, LogOut};
use crate::config::use_config;
use crate::web::DocumentListener;

const ITEM_CLASS: &str = "w-full text-left px-3 py-4 text-sm hover:bg-blue-50 hover:text-blue-700 transition-colors duration-200 flex items-center justify-between";
const OPTION_CLASS: &str = "w-full text-left px-3 py-3 text-xs hover:bg-blue-50 hover:text-blue-700 transition-colors duration-200";
const FOLLOW_UP_CLASS: &str = "w-full text-left px-3 py-2 text-xs hover:bg-blue-50 hover:text-blue-700 transition-colors duration-200";

fn option_button(
    nav: RwSignal<NavigationState>,
    parent: String,
    option: String,
    base_class: &'static str,
) -> impl IntoView {
    let section = option_section(&parent, &option);
    let label = option.clone();

    view! {
        <button
            on:click=move |_| nav.update(|n| {
                n.select_option(&parent, &option);
            })
            class=move || if nav.with(|n| n.is_active(&section)) {
                format!("{base_class} bg-blue-100 text-blue-700 font-medium")
            } else {
                format!("{base_class} text-gray-600")
            }
        >
            {label}
        </button>
    }
}

fn group_options(nav: RwSignal<NavigationState>, item: SidebarItem) -> impl IntoView {
    let options = item
        .options
        .iter()
        .map(|option| option_button(nav, item.name.clone(), option.clone(), OPTION_CLASS))
        .collect_view();
    let follow_up = item
        .follow_up
        .iter()
        .map(|option| option_button(nav, item.name.clone(), option.clone(), FOLLOW_UP_CLASS))
        .collect_view();

    view! {
        <div class="ml-4 mt-1 bg-gray-50 border-l-2 border-blue-200">
            {options}
            <div class="ml-2 border-l border-gray-300">{follow_up}</div>
        </div>
    }
}

fn sidebar_entry(nav: RwSignal<NavigationState>, item: SidebarItem) -> impl IntoView {
    let config = use_config();
    let name = item.name.clone();
    let slug = item.slug();
    let is_group = item.is_group();

    let on_click = {
        let name = name.clone();
        move |_| {
            config.with_value(|c| {
                nav.update(|n| {
                    n.select_item(&c.sidebar, &name);
                })
            })
        }
    };

    let is_expanded = {
        let name = name.clone();
        move || is_group && nav.with(|n| n.is_expanded(&name))
    };

    let chevron = {
        let is_expanded = is_expanded.clone();
        move || {
            if is_group && !is_expanded() {
                view! { <ChevronRight attr:class="w-3 h-3" /> }.into_any()
            } else {
                view! { <ChevronDown attr:class="w-3 h-3" /> }.into_any()
            }
        }
    };

    view! {
        <div class="mb-1">
            <button
                on:click=on_click
                class=move || if nav.with(|n| n.is_active(&slug)) {
                    format!("{ITEM_CLASS} bg-blue-100 text-blue-700 rounded font-medium")
                } else {
                    format!("{ITEM_CLASS} text-gray-700")
                }
            >
                <span class="flex items-center gap-1">{chevron} {name}</span>
            </button>
            {move || is_expanded().then(|| group_options(nav, item.clone()))}
        </div>
    }
}

#[component]
pub fn Sidebar(nav: RwSignal<NavigationState>, on_logout: Callback<()>) -> impl IntoView {
    let config = use_config();
    let (portal_name, items) = config.with_value(|c| (c.portal_name.clone(), c.sidebar.clone()));

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let outside_listener = StoredValue::new_local(None::<DocumentListener>);

    let listener = DocumentListener::new("mousedown", move |ev: web_sys::Event| {
        let inside = match (panel_ref.get_untracked(), ev.target()) {
            (Some(panel), Some(target)) => panel.contains(target.dyn_ref::<web_sys::Node>()),
            _ => false,
        };
        if nav.try_update(|n| n.pointer_down(inside)) == Some(true) {
            log_info!("[Sidebar] Pointer down outside the panel, groups collapsed.");
        }
    });
    match listener {
        Ok(listener) => outside_listener.set_value(Some(listener)),
        Err(e) => log_warn!("[Sidebar] Outside-click listener unavailable: {:?}", e),
    }

    on_cleanup(move || {
        outside_listener.try_update_value(Option::take);
    });

    let panel_class = move || {
        if nav.with(NavigationState::mobile_menu_open) {
            "w-64 bg-white border-r border-gray-300 transition-transform duration-300 ease-in-out md:translate-x-0 z-50 flex flex-col translate-x-0 fixed h-screen top-0"
        } else {
            "w-64 bg-white border-r border-gray-300 transition-transform duration-300 ease-in-out md:translate-x-0 z-50 flex flex-col -translate-x-full fixed md:relative h-screen md:h-auto md:min-h-screen"
        }
    };

    let entries = items
        .into_iter()
        .map(|item| sidebar_entry(nav, item))
        .collect_view();

    view! {
        <div class=panel_class node_ref=panel_ref>
            <div class="bg-blue-500 text-white px-4 py-2 text-center font-medium text-sm flex-shrink-0">
                {portal_name}
            </div>

            <nav class="p-2 flex-1 overflow-y-auto overflow-x-hidden" style="max-height: calc(100vh - 120px)">
                {entries}
            </nav>

            <div class="border-t border-gray-300 p-2 flex-shrink-0">
                <button
                    on:click=move |_| on_logout.run(())
                    class="w-full text-left px-3 py-4 text-sm text-red-600 hover:bg-red-50 transition-colors duration-200 flex items-center gap-2"
                >
                    <LogOut attr:class="w-4 h-4" />
                    "Logout"
                </button>
            </div>
        </div>
    }
}
