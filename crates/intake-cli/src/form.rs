//! Contact form state machine.
//!
//! Pure state — no I/O. The caller (the app's key dispatcher) asks
//! [`ContactForm::begin_submit`] for a validated snapshot, performs the
//! network call, and reports back through [`ContactForm::submit_succeeded`]
//! or [`ContactForm::submit_failed`]. Keeping the machine synchronous makes
//! every transition unit-testable without a server.

use intake_core::{ContactFormInput, NewSubmission, SubmitAck, ValidationErrorSet, validate};
use uuid::Uuid;

/// Failure line shown for any submit-side network or server error. The
/// underlying detail is logged, never rendered.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Success line shown after a confirmed write.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message!";

// ─── Fields ───────────────────────────────────────────────────────────────────

/// The four input fields, in focus-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  FirstName,
  LastName,
  Email,
  Message,
}

impl Field {
  pub fn next(self) -> Self {
    match self {
      Field::FirstName => Field::LastName,
      Field::LastName => Field::Email,
      Field::Email => Field::Message,
      Field::Message => Field::FirstName,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      Field::FirstName => Field::Message,
      Field::LastName => Field::FirstName,
      Field::Email => Field::LastName,
      Field::Message => Field::Email,
    }
  }
}

// ─── Phase ────────────────────────────────────────────────────────────────────

/// Phase of the current submit cycle — the outcome of one attempt, made
/// mutually exclusive by construction. A new attempt always re-enters the
/// cycle through validation, discarding whichever terminal phase was
/// showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
  /// No attempt in flight; the user is editing.
  Editing,
  /// Awaiting the write API's acknowledgment. The submit trigger is
  /// disabled in this phase.
  Submitting,
  /// Last attempt was acknowledged; the fields were cleared.
  Succeeded { submission_id: Uuid },
  /// Last attempt failed; the fields were retained.
  Failed { reason: String },
}

// ─── Form ─────────────────────────────────────────────────────────────────────

/// The contact form: draft input, focus, validation errors, submit phase.
#[derive(Debug)]
pub struct ContactForm {
  pub input:  ContactFormInput,
  pub errors: ValidationErrorSet,
  pub focus:  Field,
  pub phase:  SubmitPhase,
}

impl Default for ContactForm {
  fn default() -> Self {
    Self::new()
  }
}

impl ContactForm {
  pub fn new() -> Self {
    Self {
      input:  ContactFormInput::default(),
      errors: ValidationErrorSet::default(),
      focus:  Field::FirstName,
      phase:  SubmitPhase::Editing,
    }
  }

  /// Whether the submit trigger is currently enabled. False only while a
  /// request is in flight — at most one submission per form at a time.
  pub fn can_submit(&self) -> bool {
    self.phase != SubmitPhase::Submitting
  }

  // ── Editing ───────────────────────────────────────────────────────────────

  fn focused_value_mut(&mut self) -> &mut String {
    match self.focus {
      Field::FirstName => &mut self.input.first_name,
      Field::LastName => &mut self.input.last_name,
      Field::Email => &mut self.input.email,
      Field::Message => &mut self.input.message,
    }
  }

  pub fn insert_char(&mut self, c: char) {
    if self.phase == SubmitPhase::Submitting {
      return;
    }
    self.focused_value_mut().push(c);
  }

  pub fn backspace(&mut self) {
    if self.phase == SubmitPhase::Submitting {
      return;
    }
    self.focused_value_mut().pop();
  }

  pub fn focus_next(&mut self) {
    self.focus = self.focus.next();
  }

  pub fn focus_prev(&mut self) {
    self.focus = self.focus.prev();
  }

  // ── Submit cycle ──────────────────────────────────────────────────────────

  /// Trigger a submit attempt.
  ///
  /// Validates the whole snapshot synchronously. On failure the errors are
  /// attached, the phase returns to `Editing` (clearing any prior success
  /// or failure line), and `None` is returned — no network call is to be
  /// made. On success the phase moves to `Submitting` and the caller
  /// receives the snapshot to send. Returns `None` without side effects
  /// while a request is already in flight.
  pub fn begin_submit(&mut self) -> Option<NewSubmission> {
    if !self.can_submit() {
      return None;
    }

    self.errors = validate(&self.input);
    if !self.errors.is_empty() {
      self.phase = SubmitPhase::Editing;
      return None;
    }

    self.phase = SubmitPhase::Submitting;
    Some(self.input.to_submission())
  }

  /// The write API acknowledged the submission: clear the draft and show
  /// the success line.
  pub fn submit_succeeded(&mut self, ack: SubmitAck) {
    self.input.clear();
    self.errors = ValidationErrorSet::default();
    self.focus = Field::FirstName;
    self.phase = SubmitPhase::Succeeded {
      submission_id: ack.submission_id,
    };
  }

  /// The submit attempt failed: keep every entered value, re-enable the
  /// trigger, and surface `reason`.
  pub fn submit_failed(&mut self, reason: String) {
    self.phase = SubmitPhase::Failed { reason };
  }
}
