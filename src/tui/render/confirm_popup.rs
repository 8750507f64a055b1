use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ops::confirm::Choice;
use crate::tui::app::App;

/// Render the Yes/No confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = match &app.screen.confirm {
        Some(p) => p,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let button = |choice: Choice| {
        let focused = prompt.focused == choice;
        let color = match choice {
            Choice::No => app.theme.text,
            Choice::Yes => app.theme.danger,
        };
        let style = if focused {
            Style::default()
                .fg(bg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(bg)
        };
        Span::styled(format!(" {} ", choice.label()), style)
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {}", prompt.title), header_style)),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", prompt.message), text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", text_style),
            button(Choice::No),
            Span::styled("  ", text_style),
            button(Choice::Yes),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  y", dim_style),
            Span::styled(" yes  ", text_style),
            Span::styled("n/Esc", dim_style),
            Span::styled(" no", text_style),
        ]),
    ];

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = super::centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
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
    fn shows_title_message_and_both_options() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let id = app.cursor_task_id().unwrap();
        app.screen.remove_task(id);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Remove item"));
        assert!(output.contains("Are you sure you want to remove this item?"));
        assert!(output.contains(" No "));
        assert!(output.contains(" Yes "));
    }

    #[test]
    fn nothing_drawn_without_prompt() {
        let app = app_with_tasks(&["Buy milk"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
