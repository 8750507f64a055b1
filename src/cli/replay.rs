use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::TaskActions;
use crate::ops::confirm::Choice;
use crate::ops::notice::Notice;
use crate::ops::task_store::{SystemClock, TaskStore};
use crate::tui::input_collector::InputCollector;
use crate::tui::screen::Screen;

use super::commands::ReplayArgs;
use super::output;

/// Error type for script replay
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("could not read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: no task at position {position}")]
    OutOfRange { line: usize, position: usize },
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One script instruction. Positions are 1-based indexes into the current list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOp {
    Add(String),
    Toggle(usize),
    Remove(usize, Choice),
    Edit(usize, String),
}

/// Parse a script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptOp)>, ReplayError> {
    let mut ops = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        ops.push((line, parse_line(line, trimmed)?));
    }
    Ok(ops)
}

fn parse_line(line: usize, text: &str) -> Result<ScriptOp, ReplayError> {
    let (verb, rest) = text.split_once(' ').unwrap_or((text, ""));
    let err = |message: &str| ReplayError::Parse {
        line,
        message: message.to_string(),
    };

    match verb {
        // Title is taken verbatim, like text typed into the entry field
        "add" => Ok(ScriptOp::Add(rest.to_string())),
        "toggle" => Ok(ScriptOp::Toggle(parse_position(rest.trim(), line)?)),
        "remove" => {
            let mut parts = rest.split_whitespace();
            let position = parse_position(parts.next().unwrap_or(""), line)?;
            let choice = match parts.next() {
                Some("yes") => Choice::Yes,
                Some("no") => Choice::No,
                _ => return Err(err("remove needs a position and yes|no")),
            };
            if parts.next().is_some() {
                return Err(err("remove takes exactly two arguments"));
            }
            Ok(ScriptOp::Remove(position, choice))
        }
        "edit" => {
            let (pos, title) = rest.split_once(' ').unwrap_or((rest, ""));
            Ok(ScriptOp::Edit(parse_position(pos, line)?, title.to_string()))
        }
        other => Err(ReplayError::Parse {
            line,
            message: format!("unknown command '{}'", other),
        }),
    }
}

fn parse_position(text: &str, line: usize) -> Result<usize, ReplayError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ReplayError::Parse {
            line,
            message: format!("expected a position (1, 2, ...), got '{}'", text),
        }),
    }
}

/// Result of running a script
#[derive(Debug)]
pub struct Replay {
    pub tasks: Vec<Task>,
    /// Notices raised along the way, in order
    pub notices: Vec<Notice>,
}

/// Run parsed ops against `store` through the same screen and entry
/// component the TUI uses.
pub fn run_ops(ops: &[(usize, ScriptOp)], store: TaskStore) -> Result<Replay, ReplayError> {
    let mut screen = Screen::new(store);
    let mut entry = InputCollector::default();
    let mut notices = Vec::new();

    for (line, op) in ops {
        debug!(line, ?op, "replay step");
        match op {
            ScriptOp::Add(title) => {
                entry.field.insert_str(title);
                entry.submit(&mut screen);
            }
            ScriptOp::Toggle(pos) => {
                let id = id_at(&screen, *line, *pos)?;
                screen.toggle_task_done(id);
            }
            ScriptOp::Remove(pos, choice) => {
                let id = id_at(&screen, *line, *pos)?;
                screen.remove_task(id);
                screen.resolve_confirm(*choice);
            }
            ScriptOp::Edit(pos, title) => {
                let id = id_at(&screen, *line, *pos)?;
                screen.edit_task(id, title);
            }
        }
        if let Some(notice) = screen.notice.take() {
            notices.push(notice);
        }
    }

    Ok(Replay {
        tasks: screen.store.tasks().to_vec(),
        notices,
    })
}

fn id_at(screen: &Screen, line: usize, position: usize) -> Result<TaskId, ReplayError> {
    screen
        .store
        .tasks()
        .get(position - 1)
        .map(|t| t.id)
        .ok_or(ReplayError::OutOfRange { line, position })
}

/// `todo replay`: read the script, run it, print the list
pub fn cmd_replay(args: ReplayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(args.file.as_deref())?;
    let ops = parse_script(&text)?;
    let store = TaskStore::with_clock(Box::new(SystemClock), config.ids.strategy);
    let replay = run_ops(&ops, store)?;
    info!(steps = ops.len(), tasks = replay.tasks.len(), "replay finished");

    for notice in &replay.notices {
        eprintln!("notice: {}", notice.title);
    }
    if args.json {
        println!("{}", output::task_list_json(&replay.tasks)?);
    } else {
        print!("{}", output::format_task_list(&replay.tasks));
    }
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String, ReplayError> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
