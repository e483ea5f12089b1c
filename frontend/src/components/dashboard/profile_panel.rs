use ienabler_shared::config::ProfileField;
use leptos::prelude::*;

use crate::components::icons::User;
use crate::config::use_config;

fn field_rows(fields: Vec<ProfileField>) -> impl IntoView {
    fields
        .into_iter()
        .map(|field| {
            view! {
                <div class="flex flex-col sm:flex-row sm:justify-between gap-1 py-2 border-b border-gray-100 last:border-b-0">
                    <span class="text-xs sm:text-sm font-medium text-gray-600">{field.label}</span>
                    <span class="text-xs sm:text-sm text-gray-800 font-mono">{field.value}</span>
                </div>
            }
        })
        .collect_view()
}

/// Masked student details; nothing here is ever fetched.
#[component]
pub fn ProfilePanel() -> impl IntoView {
    let profile = use_config().with_value(|c| c.profile.clone());

    view! {
        <div class="bg-white border shadow-md border-gray-300">
            <div class="bg-blue-500 text-white px-4 py-2 text-center font-medium text-sm">
                "Student Profile"
            </div>
            <div class="p-4">
                <div class="flex justify-center mb-4">
                    <div class="w-20 h-24 sm:w-24 sm:h-28 bg-gray-200 border border-gray-300 flex items-center justify-center">
                        <User attr:class="w-10 h-10 text-gray-400" />
                    </div>
                </div>
                {field_rows(profile.fields)}

                <div class="mt-4 pt-2 border-t border-gray-300">
                    <h3 class="text-xs sm:text-sm font-semibold text-gray-700 mb-1">"Contacts"</h3>
                    {profile
                        .contacts
                        .into_iter()
                        .map(|contact| {
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left px-2 py-2 text-xs sm:text-sm hover:bg-blue-50 rounded flex flex-col sm:flex-row sm:justify-between gap-1"
                                >
                                    <span class="font-medium text-blue-600">{contact.label}</span>
                                    <span class="text-gray-800 font-mono">{contact.value}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
