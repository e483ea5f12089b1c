//! User category radio group.

use ienabler_shared::{Field, LoginForm, UserType};
use leptos::prelude::*;

#[component]
pub fn UserTypeGroup(form: RwSignal<LoginForm>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:flex sm:flex-wrap gap-2 sm:gap-4 mb-4">
            {UserType::ALL
                .into_iter()
                .map(|user_type| {
                    view! {
                        <label class="flex items-center gap-2">
                            <input
                                type="radio"
                                name="userType"
                                value=user_type.value()
                                prop:checked=move || form.with(|f| f.user_type() == user_type)
                                on:change=move |ev| {
                                    form.update(|f| f.on_field_change(Field::UserType, &event_target_value(&ev)))
                                }
                                class="w-4 h-4"
                            />
                            <span class="text-sm">{user_type.label()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
