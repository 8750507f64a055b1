use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

/// Render the blocking notice popup
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.screen.notice else {
        return;
    };

    let bg = app.theme.background;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", notice.title),
            Style::default()
                .fg(app.theme.danger)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", notice.message),
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " press any key",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = super::centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.danger).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::TaskActions;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn duplicate_notice_text() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.screen.add_task("Buy milk");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notice_popup(frame, &app, area);
        });
        assert!(output.contains("Task already registered"));
        assert!(output.contains("You cannot register a task with the same name"));
        assert!(output.contains("press any key"));
    }
}
