//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
  client::{ApiClient, ClientError},
  form::{ContactForm, Field, GENERIC_FAILURE},
  signal::RefreshSignal,
  table::SubmissionsView,
};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// The contact form.
  Form,
  /// The stored-submissions table.
  Submissions,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The contact form state machine.
  pub form: ContactForm,

  /// The submissions view state machine.
  pub table: SubmissionsView,

  /// Bumped once per successful submit; read by the submissions view's
  /// refresh check. The only state shared between the two screens.
  pub refresh: RefreshSignal,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      screen:  Screen::Form,
      form:    ContactForm::new(),
      table:   SubmissionsView::new(),
      refresh: RefreshSignal::default(),
      client:  Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the submission list and apply the result. Enters `Loading`
  /// first, so a failure never leaves stale rows behind.
  async fn refresh_table(&mut self) {
    self.table.begin_fetch(self.refresh.version());
    let result = self.client.fetch_all().await;
    if let Err(e) = &result {
      tracing::warn!(error = %e, "fetching submissions failed");
    }
    self.table.apply_fetch(result);
  }

  /// Switch to the submissions screen, re-fetching if the refresh signal
  /// moved since the last fetch (or nothing was fetched yet).
  async fn open_submissions(&mut self) {
    self.screen = Screen::Submissions;
    if self.table.needs_fetch(self.refresh.version()) {
      self.refresh_table().await;
    }
  }

  /// Run one submit attempt end to end.
  ///
  /// `begin_submit` is the validation gate: when it yields no snapshot
  /// (validation failure or an attempt already in flight) no network call
  /// is made.
  async fn submit(&mut self) {
    let Some(input) = self.form.begin_submit() else {
      return;
    };

    let result = self.client.submit(&input).await;
    self.apply_submit_result(result);
  }

  /// Apply the write call's resolution to the form and the refresh signal.
  ///
  /// The signal is bumped exactly once per acknowledged success — never on
  /// failure (and validation rejections never reach this point). Failure
  /// detail is logged; the form only shows the generic line.
  fn apply_submit_result(&mut self, result: Result<intake_core::SubmitAck, ClientError>) {
    match result {
      Ok(ack) => {
        self.form.submit_succeeded(ack);
        self.refresh.bump();
      }
      Err(e) => {
        tracing::warn!(error = %e, "submit failed");
        self.form.submit_failed(GENERIC_FAILURE.to_string());
      }
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match self.screen {
      Screen::Form => self.handle_form_key(key).await,
      Screen::Submissions => self.handle_submissions_key(key).await,
    }
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Ctrl-S submits from any field.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
      self.submit().await;
      return Ok(true);
    }

    match key.code {
      // View stored submissions.
      KeyCode::Esc => self.open_submissions().await,

      // Field navigation.
      KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),

      // Enter submits, except in the message field where it is a newline.
      KeyCode::Enter if self.form.focus == Field::Message => {
        self.form.insert_char('\n');
      }
      KeyCode::Enter => self.submit().await,

      // Editing.
      KeyCode::Backspace => self.form.backspace(),
      KeyCode::Char(c) => self.form.insert_char(c),

      _ => {}
    }
    Ok(true)
  }

  async fn handle_submissions_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit.
      KeyCode::Char('q') => return Ok(false),

      // Back to the form.
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::Form;
      }

      // Retry / manual refresh.
      KeyCode::Char('r') => self.refresh_table().await,

      _ => {}
    }
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use intake_core::SubmitAck;
  use uuid::Uuid;

  use super::*;
  use crate::{client::ApiConfig, form::SubmitPhase};

  fn app() -> App {
    // The client is never dialled in these tests; results are applied
    // directly through `apply_submit_result`.
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:0".into(),
    })
    .expect("client");
    App::new(client)
  }

  fn fill_form(app: &mut App) {
    app.form.input.first_name = "Alice".into();
    app.form.input.last_name = "Liddell".into();
    app.form.input.email = "alice@example.com".into();
    app.form.input.message = "Hello there".into();
  }

  fn ack() -> SubmitAck {
    SubmitAck {
      message:       "Form submitted successfully".into(),
      submission_id: Uuid::new_v4(),
    }
  }

  fn server_error() -> ClientError {
    ClientError::Server {
      status:  reqwest::StatusCode::INTERNAL_SERVER_ERROR,
      message: "Error storing submission".into(),
    }
  }

  #[test]
  fn acknowledged_submit_bumps_the_signal_exactly_once() {
    let mut app = app();
    fill_form(&mut app);

    app.form.begin_submit().expect("snapshot");
    app.apply_submit_result(Ok(ack()));

    assert_eq!(app.refresh.version(), 1);
    assert!(matches!(app.form.phase, SubmitPhase::Succeeded { .. }));

    // A second full cycle bumps once more, not twice.
    fill_form(&mut app);
    app.form.begin_submit().expect("snapshot");
    app.apply_submit_result(Ok(ack()));
    assert_eq!(app.refresh.version(), 2);
  }

  #[test]
  fn failed_submit_never_bumps_the_signal() {
    let mut app = app();
    fill_form(&mut app);

    app.form.begin_submit().expect("snapshot");
    app.apply_submit_result(Err(server_error()));

    assert_eq!(app.refresh.version(), 0);
    assert_eq!(
      app.form.phase,
      SubmitPhase::Failed {
        reason: GENERIC_FAILURE.to_string()
      }
    );
  }

  #[test]
  fn validation_rejection_never_reaches_the_signal() {
    let mut app = app();
    // Empty form: the validation gate yields no snapshot, so no network
    // call is made and no result is ever applied.
    assert!(app.form.begin_submit().is_none());
    assert_eq!(app.refresh.version(), 0);
    assert!(!app.form.errors.is_empty());
  }
}
