mod credential_field;
mod user_type_group;

use ienabler_shared::{Field, LoginForm, SubmitOutcome};
use leptos::prelude::*;

use crate::components::header::PortalHeader;
use crate::components::icons::{Eye, EyeOff, GraduationCap};
use crate::config::use_config;
use crate::web::Timeout;

use credential_field::{FieldFeedback, input_class};
use user_type_group::UserTypeGroup;

#[component]
pub fn LoginPage(
    /// Called once the simulated sign-in delay has elapsed
    #[prop(into)]
    on_login: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let (copy, delay, footer_links) =
        config.with_value(|c| (c.login.clone(), c.login_delay(), c.footer_links.clone()));

    let form = RwSignal::new(LoginForm::new());
    // Holding the timer keeps the pending sign-in alive; dropping it cancels.
    let pending = StoredValue::new_local(None::<Timeout>);

    let can_submit = Memo::new(move |_| form.with(LoginForm::can_submit));
    let is_submitting = Memo::new(move |_| form.with(LoginForm::is_submitting));
    let pin_visible = Memo::new(move |_| form.with(LoginForm::pin_visible));

    on_cleanup(move || {
        if let Some(Some(timer)) = pending.try_update_value(Option::take) {
            timer.cancel();
            log_info!("[Login] View closed, pending sign-in cancelled.");
        }
        form.try_update(|f| f.cancel_pending());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(outcome) = form.try_update(LoginForm::submit) else {
            return;
        };

        match outcome {
            SubmitOutcome::Rejected => {
                log_info!("[Login] Submission blocked by validation.");
            }
            SubmitOutcome::AlreadySubmitting => {}
            SubmitOutcome::Scheduled(ticket) => {
                let timer = Timeout::new(delay, move || {
                    if form.try_update(|f| f.finish_submit(ticket)) == Some(true) {
                        log_info!("[Login] Simulated sign-in finished.");
                        on_login.run(());
                    }
                });

                match timer {
                    Ok(timer) => {
                        log_info!("[Login] Simulated sign-in started ({} ms).", delay.as_millis());
                        pending.set_value(Some(timer));
                    }
                    Err(e) => {
                        log_error!("[Login] Could not start sign-in timer: {:?}", e);
                        form.update(|f| {
                            f.cancel_pending();
                        });
                    }
                }
            }
        }
    };

    let footer = footer_links
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                {(i > 0).then(|| view! { <span class="hidden sm:inline">"|"</span> })}
                <a href="#" class="hover:text-blue-600">{link}</a>
            }
        })
        .collect_view();

    let pin_actions = copy
        .pin_actions
        .iter()
        .map(|action| {
            view! {
                <button
                    type="button"
                    class="px-3 sm:px-4 py-2 text-xs sm:text-sm bg-gray-200 hover:bg-gray-300 text-gray-700 rounded transition-colors duration-200"
                >
                    {action.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-100">
            <PortalHeader />

            <div class="max-w-4xl mx-auto p-4 mt-4 sm:mt-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6">

                    // Prospective students
                    <div class="bg-white border shadow-md border-gray-300 order-2 lg:order-1">
                        <div class="bg-blue-500 text-white px-4 py-2 text-center font-medium text-sm">
                            {copy.prospective_heading.clone()}
                        </div>
                        <div class="p-4 sm:p-6">
                            <p class="text-sm text-gray-700 mb-4">{copy.prospective_intro.clone()}</p>
                            <div class="flex items-start gap-3 p-3 border border-gray-300 rounded">
                                <GraduationCap attr:class="w-6 h-6 sm:w-8 sm:h-8 mt-1 flex-shrink-0 text-ug-blue" />
                                <p class="text-sm font-medium text-gray-800">{copy.prospective_offer.clone()}</p>
                            </div>
                        </div>
                    </div>

                    // Registered users
                    <div class="bg-white border shadow-md border-gray-300 order-1 lg:order-2">
                        <div class="bg-blue-500 text-white px-4 py-2 text-center font-medium text-sm">
                            {copy.heading.clone()}
                        </div>
                        <div class="p-4 sm:p-6">
                            <UserTypeGroup form=form />

                            <form on:submit=on_submit class="space-y-4" novalidate>
                                <div>
                                    <label for="student-number" class="block text-sm font-medium text-gray-700 mb-1">
                                        "Student Number:"
                                    </label>
                                    <input
                                        id="student-number"
                                        type="text"
                                        inputmode="numeric"
                                        maxlength="8"
                                        placeholder="Enter student number"
                                        prop:value=move || form.with(|f| f.student_number().to_string())
                                        on:input=move |ev| {
                                            form.update(|f| f.on_field_change(Field::StudentNumber, &event_target_value(&ev)))
                                        }
                                        class=move || input_class(form.with(|f| f.feedback(Field::StudentNumber)), "")
                                    />
                                    <FieldFeedback
                                        feedback=Signal::derive(move || form.with(|f| f.feedback(Field::StudentNumber)))
                                        valid_message="Valid student number"
                                    />
                                </div>

                                <div>
                                    <label for="pin" class="block text-sm font-medium text-gray-700 mb-1">
                                        "PIN:"
                                    </label>
                                    <div class="relative">
                                        <input
                                            id="pin"
                                            type=move || if pin_visible.get() { "text" } else { "password" }
                                            placeholder="Enter PIN"
                                            prop:value=move || form.with(|f| f.pin().to_string())
                                            on:input=move |ev| {
                                                form.update(|f| f.on_field_change(Field::Pin, &event_target_value(&ev)))
                                            }
                                            class=move || input_class(form.with(|f| f.feedback(Field::Pin)), "pr-10")
                                        />
                                        <button
                                            type="button"
                                            on:click=move |_| form.update(LoginForm::toggle_pin_visibility)
                                            class="absolute right-2 top-1/2 transform -translate-y-1/2 text-gray-500 hover:text-gray-700"
                                        >
                                            {move || if pin_visible.get() {
                                                view! { <EyeOff attr:class="w-4 h-4" /> }.into_any()
                                            } else {
                                                view! { <Eye attr:class="w-4 h-4" /> }.into_any()
                                            }}
                                        </button>
                                    </div>
                                    <FieldFeedback
                                        feedback=Signal::derive(move || form.with(|f| f.feedback(Field::Pin)))
                                        valid_message="Valid PIN"
                                    />
                                </div>

                                <p class="text-xs text-gray-600">{copy.help_text.clone()}</p>

                                <div class="flex flex-wrap gap-2 pt-2">
                                    <button
                                        type="submit"
                                        disabled=move || !can_submit.get()
                                        class=move || if can_submit.get() {
                                            "px-4 py-2 text-sm font-medium rounded transition-all duration-200 bg-blue-600 hover:bg-blue-700 text-white shadow-md hover:shadow-lg transform hover:scale-105"
                                        } else {
                                            "px-4 py-2 text-sm font-medium rounded transition-all duration-200 bg-gray-300 text-gray-500 cursor-not-allowed"
                                        }
                                    >
                                        {move || if is_submitting.get() {
                                            view! {
                                                <div class="flex items-center gap-2">
                                                    <div class="w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                                    "Logging in..."
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            "Login".into_any()
                                        }}
                                    </button>
                                    {pin_actions}
                                </div>

                                <div class="pt-2">
                                    <button type="button" class="text-sm text-blue-600 hover:text-blue-800 underline">
                                        {copy.forgot_student_number.clone()}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>

                <div class="text-center mt-6 sm:mt-8 text-xs text-gray-600 px-4">
                    <div class="flex justify-center gap-2 sm:gap-4 flex-wrap">{footer}</div>
                </div>
            </div>
        </div>
    }
}
