use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list, one row per task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.screen.store.is_empty() {
        let empty = Paragraph::new("  No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    app.scroll_to_cursor(visible_height);

    let show_cursor = matches!(app.mode, Mode::Navigate | Mode::Edit);
    let width = area.width as usize;
    let snapshot = app.screen.store.snapshot();

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in snapshot
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = show_cursor && i == app.cursor;
        let editing = app
            .row_edit
            .as_mut()
            .filter(|edit| is_cursor && edit.id == task.id);

        let line = match editing {
            Some(edit) => {
                // Prefix is "› [ ] ", 6 cells
                let field_width = width.saturating_sub(7);
                let text = edit.field.visible_text(field_width).to_string();
                let cursor_col = edit.field.visible_cursor_col();
                let row_y = area.y + (i - app.scroll_offset) as u16;
                frame.set_cursor_position(Position::new(
                    area.x + 6 + cursor_col as u16,
                    row_y,
                ));
                edit_row_line(app, task, text)
            }
            None => task_row_line(app, task, is_cursor, width),
        };
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn row_prefix<'a>(
    app: &App,
    task: &Task,
    is_cursor: bool,
    bg: ratatui::style::Color,
) -> Vec<Span<'a>> {
    let marker = if is_cursor { "\u{203A} " } else { "  " };
    vec![
        Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            format!("[{}] ", task.checkbox_char()),
            Style::default()
                .fg(app.theme.checkbox_color(task.done))
                .bg(bg),
        ),
    ]
}

fn task_row_line<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let mut spans = row_prefix(app, task, is_cursor, bg);

    let title_style = if task.done {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let title = unicode::truncate_to_width(&task.title, width.saturating_sub(6));
    spans.push(Span::styled(title, title_style));

    // Pad cursor line
    if is_cursor {
        let content_width: usize = spans
            .iter()
            .map(|s| unicode::display_width(&s.content))
            .sum();
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }
    Line::from(spans)
}

fn edit_row_line<'a>(app: &App, task: &Task, text: String) -> Line<'a> {
    let bg = app.theme.selection_bg;
    let mut spans = row_prefix(app, task, true, bg);
    spans.push(Span::styled(
        text,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::UNDERLINED),
    ));
    Line::from(spans)
}
