use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::model::config::IdStrategy;
use crate::ops::task_store::TaskStore;
use crate::ops::task_store::test_clock::ManualClock;
use crate::tui::app::{App, Mode};

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A fresh app in entry mode with a deterministic clock
pub fn empty_app() -> App {
    let clock = ManualClock::at(1_700_000_000_000);
    let store = TaskStore::with_clock(Box::new(clock), IdStrategy::Monotonic);
    App::new(&Config::default(), store)
}

/// An app in navigate mode holding `titles`, cursor on the first row
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut app = empty_app();
    for title in titles {
        app.screen.store.add_task(title).unwrap();
    }
    app.mode = Mode::Navigate;
    app
}
