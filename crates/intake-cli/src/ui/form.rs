//! Contact form pane.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
  app::App,
  form::{ContactForm, Field, SUCCESS_MESSAGE, SubmitPhase},
};

/// Render the contact form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let form = &app.form;

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // first name
      Constraint::Length(1), // error
      Constraint::Length(3), // last name
      Constraint::Length(1), // error
      Constraint::Length(3), // email
      Constraint::Length(1), // error
      Constraint::Min(5),    // message
      Constraint::Length(1), // error
      Constraint::Length(1), // outcome line
    ])
    .split(area);

  draw_input(f, rows[0], form, Field::FirstName, " First name * ", &form.input.first_name);
  draw_error(f, rows[1], form.errors.first_name);
  draw_input(f, rows[2], form, Field::LastName, " Last name * ", &form.input.last_name);
  draw_error(f, rows[3], form.errors.last_name);
  draw_input(f, rows[4], form, Field::Email, " Email * ", &form.input.email);
  draw_error(f, rows[5], form.errors.email);
  draw_input(f, rows[6], form, Field::Message, " Message * ", &form.input.message);
  draw_error(f, rows[7], form.errors.message);
  draw_outcome(f, rows[8], form);
}

fn draw_input(
  f: &mut Frame,
  area: Rect,
  form: &ContactForm,
  field: Field,
  title: &str,
  value: &str,
) {
  let focused = form.focus == field;

  let border_style = if focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border_style);

  // Trailing cursor marker on the focused field.
  let text = if focused {
    format!("{value}_")
  } else {
    value.to_string()
  };

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
}

fn draw_error(f: &mut Frame, area: Rect, message: Option<&'static str>) {
  let Some(message) = message else {
    return;
  };
  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      format!(" {message}"),
      Style::default().fg(Color::Red),
    ))),
    area,
  );
}

fn draw_outcome(f: &mut Frame, area: Rect, form: &ContactForm) {
  let line = match &form.phase {
    SubmitPhase::Editing => return,
    SubmitPhase::Submitting => Span::styled(
      " Sending…",
      Style::default().fg(Color::DarkGray),
    ),
    SubmitPhase::Succeeded { .. } => Span::styled(
      format!(" {SUCCESS_MESSAGE}"),
      Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD),
    ),
    SubmitPhase::Failed { reason } => Span::styled(
      format!(" {reason}"),
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ),
  };
  f.render_widget(Paragraph::new(Line::from(line)), area);
}
