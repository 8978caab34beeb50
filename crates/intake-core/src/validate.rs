//! Field-level validation schema for the contact form.
//!
//! Pure functions; no I/O, no ordering dependency between fields. All four
//! fields are checked independently on every call, so validating the same
//! snapshot twice yields an identical [`ValidationErrorSet`].

use crate::submission::ContactFormInput;

// ─── Error set ───────────────────────────────────────────────────────────────

/// Per-field validation messages. At most one message per field; a `None`
/// field passed its rule. Replaced wholesale on every validation pass —
/// never merged with a previous set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
  pub first_name: Option<&'static str>,
  pub last_name:  Option<&'static str>,
  pub email:      Option<&'static str>,
  pub message:    Option<&'static str>,
}

impl ValidationErrorSet {
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Number of fields currently failing.
  pub fn len(&self) -> usize {
    [
      self.first_name.is_some(),
      self.last_name.is_some(),
      self.email.is_some(),
      self.message.is_some(),
    ]
    .iter()
    .filter(|&&failed| failed)
    .count()
  }
}

// ─── Schema ──────────────────────────────────────────────────────────────────

/// Validate a whole form snapshot.
///
/// Required-ness is checked after trimming, so whitespace-only input does
/// not pass. For the email field, "required" takes precedence over the
/// format rule: an empty email reports only the required message, a
/// non-empty value failing the grammar reports only the format message.
pub fn validate(input: &ContactFormInput) -> ValidationErrorSet {
  ValidationErrorSet {
    first_name: input
      .first_name
      .trim()
      .is_empty()
      .then_some("First name is required"),
    last_name: input
      .last_name
      .trim()
      .is_empty()
      .then_some("Last name is required"),
    email: validate_email(&input.email),
    message: input
      .message
      .trim()
      .is_empty()
      .then_some("Message is required"),
  }
}

fn validate_email(value: &str) -> Option<&'static str> {
  let value = value.trim();
  if value.is_empty() {
    return Some("Email is required");
  }
  if !is_valid_email(value) {
    return Some("Enter a valid email address");
  }
  None
}

/// Structural email check: one `@`, non-empty local part, dotted domain
/// with no empty labels, no whitespace, no doubled or edge dots in the
/// local part.
fn is_valid_email(value: &str) -> bool {
  if value.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = value.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
    return false;
  }
  // The domain needs at least two labels, all non-empty.
  domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled() -> ContactFormInput {
    ContactFormInput {
      first_name: "Alice".into(),
      last_name:  "Liddell".into(),
      email:      "alice@example.com".into(),
      message:    "Hello there".into(),
    }
  }

  // ── Required fields ─────────────────────────────────────────────────────

  #[test]
  fn complete_input_is_valid() {
    assert!(validate(&filled()).is_empty());
  }

  #[test]
  fn empty_first_name_is_the_only_error() {
    let mut input = filled();
    input.first_name.clear();
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first_name, Some("First name is required"));
  }

  #[test]
  fn empty_last_name_is_the_only_error() {
    let mut input = filled();
    input.last_name.clear();
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.last_name, Some("Last name is required"));
  }

  #[test]
  fn empty_email_is_the_only_error() {
    let mut input = filled();
    input.email.clear();
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.email, Some("Email is required"));
  }

  #[test]
  fn empty_message_is_the_only_error() {
    let mut input = filled();
    input.message.clear();
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message, Some("Message is required"));
  }

  #[test]
  fn all_empty_yields_four_errors() {
    let errors = validate(&ContactFormInput::default());
    assert_eq!(errors.len(), 4);
  }

  #[test]
  fn whitespace_only_counts_as_empty() {
    let mut input = filled();
    input.message = "   \n".into();
    let errors = validate(&input);
    assert_eq!(errors.message, Some("Message is required"));
  }

  // ── Email grammar ───────────────────────────────────────────────────────

  #[test]
  fn malformed_email_reports_format_not_required() {
    let mut input = filled();
    input.email = "test".into();
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.email, Some("Enter a valid email address"));
  }

  #[test]
  fn empty_email_reports_required_not_format() {
    let mut input = filled();
    input.email = "  ".into();
    let errors = validate(&input);
    assert_eq!(errors.email, Some("Email is required"));
  }

  #[test]
  fn email_grammar_accepts_common_shapes() {
    for good in [
      "a@b.co",
      "first.last@example.com",
      "user+tag@sub.example.org",
    ] {
      assert!(is_valid_email(good), "{good} should be accepted");
    }
  }

  #[test]
  fn email_grammar_rejects_structural_breakage() {
    for bad in [
      "test",
      "@example.com",
      "user@",
      "user@nodot",
      "user@@example.com",
      "user@example..com",
      "user@.example.com",
      ".user@example.com",
      "us er@example.com",
    ] {
      assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
  }

  // ── Idempotence ─────────────────────────────────────────────────────────

  #[test]
  fn validation_is_idempotent_on_unchanged_input() {
    let mut input = filled();
    input.email = "not-an-email".into();
    input.message.clear();
    assert_eq!(validate(&input), validate(&input));
  }
}
