use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::tui::input_collector::EntryFocus;

pub const PLACEHOLDER: &str = "Add a new task...";
const BUTTON: &str = "[ + ]";

/// Render the new-task entry row: bordered text field plus add button
pub fn render_entry_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let active = app.mode == Mode::Entry;
    let border_color = if active {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BUTTON.len() as u16 + 1),
        ])
        .split(inner);
    let field_area = cols[0];
    let button_area = cols[1];

    let field_focused = active && app.entry.focus == EntryFocus::Field;
    let line = if app.entry.field.is_empty() {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        // One cell of left padding, one spare cell for the cursor
        let width = (field_area.width as usize).saturating_sub(2);
        let visible = app.entry.field.visible_text(width).to_string();
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(visible, Style::default().fg(app.theme.text_bright).bg(bg)),
        ])
    };
    frame.render_widget(Paragraph::new(line), field_area);

    if field_focused {
        let col = if app.entry.field.is_empty() {
            0
        } else {
            app.entry.field.visible_cursor_col()
        };
        frame.set_cursor_position(Position::new(
            field_area.x + 1 + col as u16,
            field_area.y,
        ));
    }

    let button_style = if active && app.entry.focus == EntryFocus::AddButton {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let button = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(BUTTON, button_style),
    ]));
    frame.render_widget(button, button_area);
}
