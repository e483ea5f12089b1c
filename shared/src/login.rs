//! Login form state.
//!
//! Holds the credential fields together with their per-field feedback and the
//! in-flight submission. The form never talks to a clock itself: `submit`
//! hands out a [`SubmitTicket`], the caller arms a timer, and the timer hands
//! the ticket back through [`LoginForm::finish_submit`]. A ticket that was
//! cancelled or already redeemed is refused, so the success callback runs at
//! most once per submission.

use crate::validation::{FieldError, sanitize_student_number, validate_pin, validate_student_number};

/// Form fields addressable by input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StudentNumber,
    Pin,
    UserType,
}

/// Category chosen in the login radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Student,
    Personnel,
    Other,
    Alumni,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Student,
        UserType::Personnel,
        UserType::Other,
        UserType::Alumni,
    ];

    /// Value carried by the radio input.
    pub fn value(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Personnel => "personnel",
            UserType::Other => "other",
            UserType::Alumni => "alumni",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Personnel => "Personnel",
            UserType::Other => "Other",
            UserType::Alumni => "Alumni",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Feedback shown under a validated field.
///
/// A single enum per field keeps "invalid" and "valid" mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Never edited and never submitted.
    #[default]
    Untouched,
    Invalid(FieldError),
    Valid,
}

impl Feedback {
    fn from_check(value: &str, check: Result<(), FieldError>) -> Self {
        match check {
            Err(e) => Feedback::Invalid(e),
            Ok(()) if value.is_empty() => Feedback::Untouched,
            Ok(()) => Feedback::Valid,
        }
    }

    pub fn error(&self) -> Option<FieldError> {
        match self {
            Feedback::Invalid(e) => Some(*e),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Feedback::Valid)
    }
}

/// Identifies one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; the error map has been refreshed.
    Rejected,
    /// A submission is already waiting on its timer.
    AlreadySubmitting,
    /// Validation passed; arm the delay timer and redeem the ticket when it fires.
    Scheduled(SubmitTicket),
}

/// Credential form state owned by the login view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    student_number: String,
    pin: String,
    user_type: UserType,
    pin_visible: bool,
    student_number_feedback: Feedback,
    pin_feedback: Feedback,
    pending: Option<SubmitTicket>,
    next_ticket: u64,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student_number(&self) -> &str {
        &self.student_number
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn pin_visible(&self) -> bool {
        self.pin_visible
    }

    pub fn feedback(&self, field: Field) -> Feedback {
        match field {
            Field::StudentNumber => self.student_number_feedback,
            Field::Pin => self.pin_feedback,
            Field::UserType => Feedback::Untouched,
        }
    }

    /// Entry of the field error map.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.feedback(field).error()
    }

    /// Entry of the field validity map.
    pub fn is_valid(&self, field: Field) -> bool {
        self.feedback(field).is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.student_number_feedback.error().is_none()
            && self.pin_feedback.error().is_none()
            && !self.student_number.is_empty()
            && !self.pin.is_empty()
            && !self.is_submitting()
    }

    /// Stores a keystroke and refreshes that field's feedback only.
    ///
    /// The student number is sanitized before it is stored. An unknown user
    /// type value leaves the current selection in place.
    pub fn on_field_change(&mut self, field: Field, raw: &str) {
        match field {
            Field::StudentNumber => {
                self.student_number = sanitize_student_number(raw);
                self.student_number_feedback = Feedback::from_check(
                    &self.student_number,
                    validate_student_number(&self.student_number),
                );
            }
            Field::Pin => {
                self.pin = raw.to_string();
                self.pin_feedback = Feedback::from_check(&self.pin, validate_pin(&self.pin));
            }
            Field::UserType => {
                if let Some(user_type) = UserType::from_value(raw) {
                    self.user_type = user_type;
                }
            }
        }
    }

    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
    }

    pub fn toggle_pin_visibility(&mut self) {
        self.pin_visible = !self.pin_visible;
    }

    /// Re-validates both required fields and, if they pass, opens a submission.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.pending.is_some() {
            return SubmitOutcome::AlreadySubmitting;
        }

        let student_number = validate_student_number(&self.student_number);
        let pin = validate_pin(&self.pin);
        self.student_number_feedback = Feedback::from_check(&self.student_number, student_number);
        self.pin_feedback = Feedback::from_check(&self.pin, pin);

        if student_number.is_err() || pin.is_err() {
            return SubmitOutcome::Rejected;
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        SubmitOutcome::Scheduled(ticket)
    }

    /// Closes the submission identified by `ticket`.
    ///
    /// Returns `true` exactly once for the live ticket; the caller invokes the
    /// success callback only then.
    pub fn finish_submit(&mut self, ticket: SubmitTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the in-flight submission, if any, so its ticket can no longer be redeemed.
    pub fn cancel_pending(&mut self) -> Option<SubmitTicket> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests;
