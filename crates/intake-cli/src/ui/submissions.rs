//! Submissions table pane.

use chrono::Local;
use intake_core::StoredSubmission;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
  app::App,
  table::TableState,
};

/// Render the submissions screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  match &app.table.state {
    TableState::Loading => draw_notice(f, area, "Loading submissions…", Color::DarkGray),
    TableState::Empty => draw_empty(f, area),
    TableState::Error(message) => draw_error(f, area, message),
    TableState::Populated(records) => draw_table(f, area, records),
  }
}

// ─── Placeholder states ──────────────────────────────────────────────────────

fn outer_block() -> Block<'static> {
  Block::default()
    .title(" Contact Form Submissions ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray))
}

fn draw_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
  let block = outer_block();
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      text.to_string(),
      Style::default().fg(color),
    ))),
    inner,
  );
}

fn draw_empty(f: &mut Frame, area: Rect) {
  let block = outer_block();
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(Span::styled(
        "No Submissions Yet",
        Style::default().add_modifier(Modifier::BOLD),
      )),
      Line::from("There are no contact form submissions to display."),
    ]),
    inner,
  );
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
  let block = outer_block();
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(Span::styled(
        "Error Loading Submissions",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
      )),
      Line::from(message.to_string()),
      Line::from(Span::styled(
        "Press r to retry.",
        Style::default().fg(Color::DarkGray),
      )),
    ]),
    inner,
  );
}

// ─── Populated table ─────────────────────────────────────────────────────────

fn draw_table(f: &mut Frame, area: Rect, records: &[StoredSubmission]) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),    // table
      Constraint::Length(1), // footer
    ])
    .split(area);

  let header = Row::new(vec!["Date", "Name", "Email", "Message"]).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let body = records.iter().map(|r| {
    // Unread rows stand out; the flag is display-only here.
    let style = if r.read {
      Style::default().fg(Color::DarkGray)
    } else {
      Style::default().add_modifier(Modifier::BOLD)
    };
    Row::new(vec![
      format_date(r),
      r.full_name(),
      r.email.clone(),
      r.message.replace('\n', " "),
    ])
    .style(style)
  });

  let table = Table::new(
    body,
    [
      Constraint::Length(18),
      Constraint::Length(22),
      Constraint::Length(28),
      Constraint::Min(20),
    ],
  )
  .header(header)
  .block(outer_block());

  f.render_widget(table, rows[0]);

  f.render_widget(
    Paragraph::new(Span::styled(
      format!(" Total submissions: {}", records.len()),
      Style::default().fg(Color::DarkGray),
    )),
    rows[1],
  );
}

fn format_date(r: &StoredSubmission) -> String {
  r.created_at
    .with_timezone(&Local)
    .format("%b %d, %Y %H:%M")
    .to_string()
}
