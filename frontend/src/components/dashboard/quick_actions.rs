use ienabler_shared::NavigationState;
use leptos::prelude::*;

use crate::config::use_config;

/// Static shortcut cards. They do not navigate anywhere.
#[component]
pub fn QuickActions() -> impl IntoView {
    let actions = use_config().with_value(|c| c.quick_actions.clone());

    let cards = actions
        .into_iter()
        .map(|action| {
            view! {
                <div class="bg-white border shadow-md border-gray-300 hover:shadow-lg transition-shadow duration-200 cursor-pointer">
                    <div class="bg-blue-500 text-white px-4 py-2 text-center font-medium text-sm">
                        {action.title}
                    </div>
                    <div class="p-4 h-16 sm:h-20"></div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">{cards}</div> }
}

/// Panel for the selected group option, titled with the option's label.
///
/// Renders nothing while a leaf item or the default section is active.
#[component]
pub fn SectionDetail(nav: RwSignal<NavigationState>) -> impl IntoView {
    let config = use_config();

    let selected = Memo::new(move |_| {
        config.with_value(|c| {
            nav.with(|n| {
                n.active_option(&c.sidebar)
                    .map(|(item, option)| (item.name.clone(), option.to_string()))
            })
        })
    });

    move || {
        selected.get().map(|(group, option)| {
            view! {
                <div class="mt-4 sm:mt-6 bg-white border shadow-md border-gray-300">
                    <div class="bg-blue-500 text-white px-4 py-2 font-medium text-sm">{option.clone()}</div>
                    <div class="p-4 sm:p-6">
                        <p class="text-sm text-gray-600">
                            "Content for " {option} " under " {group} " will be displayed here."
                        </p>
                    </div>
                </div>
            }
        })
    }
}
