//! Feedback rendering for the validated credential inputs.

use ienabler_shared::Feedback;
use leptos::prelude::*;

use crate::components::icons::AlertCircle;

/// Input classes with the border color reflecting the field's feedback.
pub fn input_class(feedback: Feedback, extra: &str) -> String {
    let border = match feedback {
        Feedback::Invalid(_) => "border-red-500",
        Feedback::Valid => "border-green-500",
        Feedback::Untouched => "border-gray-300",
    };
    format!("w-full px-3 py-2 {extra} border rounded {border} focus:outline-none focus:ring-1 focus:ring-blue-500")
}

/// Inline message under an input: the error with an alert glyph, or a
/// confirmation once the value is valid.
#[component]
pub fn FieldFeedback(feedback: Signal<Feedback>, valid_message: &'static str) -> impl IntoView {
    move || match feedback.get() {
        Feedback::Invalid(error) => view! {
            <div class="flex items-center gap-1 text-red-600 text-xs mt-1">
                <AlertCircle attr:class="w-3 h-3" />
                {error.message()}
            </div>
        }
        .into_any(),
        Feedback::Valid => view! {
            <div class="text-green-600 text-xs mt-1">"✓ " {valid_message}</div>
        }
        .into_any(),
        Feedback::Untouched => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ienabler_shared::FieldError;

    #[test]
    fn test_input_class_border_follows_feedback() {
        assert!(input_class(Feedback::Untouched, "").contains("border-gray-300"));
        assert!(input_class(Feedback::Valid, "").contains("border-green-500"));
        assert!(
            input_class(Feedback::Invalid(FieldError::PinTooShort), "").contains("border-red-500")
        );
    }

    #[test]
    fn test_input_class_keeps_extra_classes() {
        let class = input_class(Feedback::Untouched, "pr-10");
        assert!(class.contains(" pr-10 "));
        assert!(class.starts_with("w-full"));
    }
}
