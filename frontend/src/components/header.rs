//! Header bar shared by the login page and the dashboard.

use ienabler_shared::calendar::{banner_date, today};
use leptos::prelude::*;

use crate::components::icons::GraduationCap;
use crate::config::use_config;

/// Crest, institution name and the date banner.
///
/// `children` render before the crest (the dashboard puts its mobile menu
/// button there).
#[component]
pub fn PortalHeader(
    #[prop(optional)] children: Option<Children>,
    /// Slimmer padding for the dashboard
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let config = use_config();
    let (institution, date) = config.with_value(|c| {
        (
            c.institution.clone(),
            banner_date(c.banner_date.unwrap_or_else(today)),
        )
    });

    let bar_class = if compact {
        "bg-white border-b border-gray-300 px-4 py-1"
    } else {
        "bg-white border-b border-gray-300 px-4 py-3"
    };

    view! {
        <div class=bar_class>
            <div class="flex items-center justify-between max-w-7xl mx-auto">
                <div class="flex items-center gap-2 sm:gap-3">
                    {children.map(|children| children())}
                    <div class="w-8 h-8 sm:w-12 sm:h-12 rounded bg-ug-blue text-white flex items-center justify-center">
                        <GraduationCap attr:class="w-5 h-5 sm:w-7 sm:h-7" />
                    </div>
                    <span class="text-xs sm:text-sm font-medium text-gray-700">{institution}</span>
                </div>
                <div class="text-xs sm:text-sm text-gray-600 hidden sm:block">{date}</div>
            </div>
        </div>
    }
}
