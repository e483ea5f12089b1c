use super::*;

// =========================================================
// helpers
// =========================================================

fn filled(student_number: &str, pin: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.on_field_change(Field::StudentNumber, student_number);
    form.on_field_change(Field::Pin, pin);
    form
}

fn scheduled(outcome: SubmitOutcome) -> SubmitTicket {
    match outcome {
        SubmitOutcome::Scheduled(ticket) => ticket,
        other => panic!("expected a scheduled submission, got {other:?}"),
    }
}

// =========================================================
// field changes
// =========================================================

#[test]
fn test_new_form_is_empty_and_disabled() {
    let form = LoginForm::new();
    assert_eq!(form.student_number(), "");
    assert_eq!(form.pin(), "");
    assert_eq!(form.user_type(), UserType::Student);
    assert!(!form.pin_visible());
    assert_eq!(form.feedback(Field::StudentNumber), Feedback::Untouched);
    assert!(!form.can_submit());
}

#[test]
fn test_student_number_is_sanitized_on_change() {
    let mut form = LoginForm::new();
    form.on_field_change(Field::StudentNumber, "4a1-2 3456789");
    assert_eq!(form.student_number(), "41234567");
    assert!(form.is_valid(Field::StudentNumber));
    assert_eq!(form.error(Field::StudentNumber), None);
}

#[test]
fn test_pin_is_stored_verbatim() {
    let mut form = LoginForm::new();
    form.on_field_change(Field::Pin, " ab 1");
    assert_eq!(form.pin(), " ab 1");
    assert!(form.is_valid(Field::Pin));
}

#[test]
fn test_change_only_touches_its_own_field() {
    let mut form = LoginForm::new();
    form.on_field_change(Field::Pin, "12");
    assert_eq!(form.error(Field::Pin), Some(FieldError::PinTooShort));

    form.on_field_change(Field::StudentNumber, "41234567");
    assert_eq!(form.error(Field::Pin), Some(FieldError::PinTooShort));
    assert!(form.is_valid(Field::StudentNumber));
}

#[test]
fn test_clearing_a_field_reports_required() {
    let mut form = filled("41234567", "1234");
    form.on_field_change(Field::StudentNumber, "");
    assert_eq!(
        form.error(Field::StudentNumber),
        Some(FieldError::StudentNumberRequired)
    );
    assert!(!form.is_valid(Field::StudentNumber));
    assert!(!form.can_submit());
}

#[test]
fn test_error_and_validity_are_exclusive() {
    let inputs = ["", "0", "04123456", "41234567", "4123456", "abc"];
    let mut form = LoginForm::new();
    for input in inputs {
        form.on_field_change(Field::StudentNumber, input);
        form.on_field_change(Field::Pin, input);
        for field in [Field::StudentNumber, Field::Pin] {
            assert!(
                !(form.error(field).is_some() && form.is_valid(field)),
                "{field:?} with {input:?}"
            );
        }
    }
}

#[test]
fn test_user_type_values_are_distinct() {
    let mut form = LoginForm::new();
    for user_type in UserType::ALL {
        form.on_field_change(Field::UserType, user_type.value());
        assert_eq!(form.user_type(), user_type);
    }

    let values: Vec<_> = UserType::ALL.iter().map(UserType::value).collect();
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_unknown_user_type_is_ignored() {
    let mut form = LoginForm::new();
    form.set_user_type(UserType::Alumni);
    form.on_field_change(Field::UserType, "applicant");
    assert_eq!(form.user_type(), UserType::Alumni);
}

#[test]
fn test_toggle_pin_visibility() {
    let mut form = LoginForm::new();
    form.toggle_pin_visibility();
    assert!(form.pin_visible());
    form.toggle_pin_visibility();
    assert!(!form.pin_visible());
}

// =========================================================
// submit gating
// =========================================================

#[test]
fn test_submit_disabled_when_either_field_empty() {
    let form = filled("41234567", "");
    assert!(!form.can_submit());

    let form = filled("", "1234");
    assert!(!form.can_submit());
}

#[test]
fn test_invalid_scenario_keeps_submit_disabled() {
    let form = filled("04123456", "12");
    assert_eq!(
        form.error(Field::StudentNumber).map(|e| e.message()),
        Some("Student number cannot start with 0")
    );
    assert_eq!(
        form.error(Field::Pin).map(|e| e.message()),
        Some("PIN must be at least 4 characters")
    );
    assert!(!form.can_submit());
}

#[test]
fn test_valid_scenario_enables_submit() {
    let form = filled("41234567", "1234");
    assert_eq!(form.error(Field::StudentNumber), None);
    assert_eq!(form.error(Field::Pin), None);
    assert!(form.can_submit());
}

// =========================================================
// submit lifecycle
// =========================================================

#[test]
fn test_submit_revalidates_untouched_fields() {
    let mut form = LoginForm::new();
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(
        form.error(Field::StudentNumber),
        Some(FieldError::StudentNumberRequired)
    );
    assert_eq!(form.error(Field::Pin), Some(FieldError::PinRequired));
    assert!(!form.is_submitting());
}

#[test]
fn test_rejected_submit_opens_no_submission() {
    let mut form = filled("41234567", "12");
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert!(!form.is_submitting());
}

#[test]
fn test_successful_submit_fires_once() {
    let mut form = filled("41234567", "1234");
    let ticket = scheduled(form.submit());

    assert!(form.is_submitting());
    assert!(!form.can_submit());

    assert!(form.finish_submit(ticket));
    assert!(!form.is_submitting());

    // a second timer firing with the same ticket does nothing
    assert!(!form.finish_submit(ticket));
}

#[test]
fn test_submit_while_pending_is_refused() {
    let mut form = filled("41234567", "1234");
    let first = scheduled(form.submit());
    assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitting);
    assert!(form.finish_submit(first));
}

#[test]
fn test_cancelled_submission_never_completes() {
    let mut form = filled("41234567", "1234");
    let ticket = scheduled(form.submit());

    assert_eq!(form.cancel_pending(), Some(ticket));
    assert!(!form.finish_submit(ticket));
    assert!(!form.is_submitting());
    assert_eq!(form.cancel_pending(), None);
}

#[test]
fn test_stale_ticket_cannot_close_new_submission() {
    let mut form = filled("41234567", "1234");
    let stale = scheduled(form.submit());
    form.cancel_pending();

    let fresh = scheduled(form.submit());
    assert_ne!(stale, fresh);
    assert!(!form.finish_submit(stale));
    assert!(form.is_submitting());
    assert!(form.finish_submit(fresh));
}
