use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// "1 task" / "3 tasks"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", count)
    }
}

/// Render the header: title on the left, task count on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.header_bg;
    let width = area.width as usize;

    let title = format!(" {}", app.title);
    let count = format!("{} ", count_label(app.task_count()));

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let count_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(title.clone(), title_style)];
    let used = unicode::display_width(&title) + unicode::display_width(&count);
    if used <= width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(count, count_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 tasks");
        assert_eq!(count_label(1), "1 task");
        assert_eq!(count_label(12), "12 tasks");
    }

    #[test]
    fn header_with_one_task() {
        let app = app_with_tasks(&["Buy milk"]);
        let output = render_to_string(24, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, format!(" todo{}1 task", " ".repeat(12)));
    }

    #[test]
    fn header_tracks_collection_length() {
        let mut app = app_with_tasks(&["a", "b", "c"]);
        let id = app.cursor_task_id().unwrap();
        app.screen.store.remove_task(id);
        let output = render_to_string(24, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.ends_with("2 tasks"));
    }

    #[test]
    fn narrow_header_drops_count() {
        let app = app_with_tasks(&["a"]);
        let output = render_to_string(8, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, " todo");
    }
}
