use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, TaskId};
use crate::ops::task_store::{SystemClock, TaskStore};

use super::input;
use super::input_collector::InputCollector;
use super::render;
use super::screen::Screen;
use super::text_field::TextField;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the new-task field
    Entry,
    /// Moving through the list
    Navigate,
    /// Editing the title of one row
    Edit,
}

/// Per-row edit state (presentation only, not part of the store)
#[derive(Debug, Clone)]
pub struct RowEdit {
    pub id: TaskId,
    pub field: TextField,
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub entry: InputCollector,
    pub mode: Mode,
    pub title: String,
    pub theme: Theme,
    /// Index of the selected row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub row_edit: Option<RowEdit>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, store: TaskStore) -> Self {
        App {
            screen: Screen::new(store),
            entry: InputCollector::default(),
            mode: Mode::Entry,
            title: config.screen.title.clone(),
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            row_edit: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// App with an empty wall-clock store
    pub fn from_config(config: &Config) -> Self {
        let store = TaskStore::with_clock(Box::new(SystemClock), config.ids.strategy);
        Self::new(config, store)
    }

    pub fn task_count(&self) -> usize {
        self.screen.store.len()
    }

    /// Id of the task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.screen.store.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor on an existing row after the list shrank
    pub fn clamp_cursor(&mut self) {
        let count = self.task_count();
        if count == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Adjust `scroll_offset` so the cursor row is within `visible` rows
    pub fn scroll_to_cursor(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
    }

    /// Start editing the title of the row under the cursor
    pub fn begin_row_edit(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        let title = self
            .screen
            .store
            .get(id)
            .map(|t| t.title.clone())
            .unwrap_or_default();
        self.row_edit = Some(RowEdit {
            id,
            field: TextField::with_text(&title),
        });
        self.mode = Mode::Edit;
    }

    pub fn cancel_row_edit(&mut self) {
        self.row_edit = None;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.task_count(), "tui exiting");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
