pub mod confirm_popup;
pub mod entry_row;
pub mod header;
pub mod help_overlay;
pub mod notice_popup;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (1 row) | entry row (3 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    entry_row::render_entry_row(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays, topmost last
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.screen.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.screen.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, area);
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::*;

    #[test]
    fn full_screen_shows_all_regions() {
        let mut app = app_with_tasks(&["Buy milk", "Walk the dog"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("todo"));
        assert!(output.contains("2 tasks"));
        assert!(output.contains("Add a new task..."));
        assert!(output.contains("[ ] Buy milk"));
        assert!(output.contains("[ ] Walk the dog"));
    }

    #[test]
    fn confirm_popup_draws_over_list() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let id = app.cursor_task_id().unwrap();
        crate::ops::TaskActions::remove_task(&mut app.screen, id);
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Remove item"));
        assert!(output.contains("Are you sure you want to remove this item?"));
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(50, 40, area), area);
    }
}
