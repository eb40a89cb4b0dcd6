//! Terminal host for the task board.
//!
//! # Responsibility
//! - Translate stdin commands into board events.
//! - Print the rendered view after every command.
//!
//! Usage: `taskboard [LOG_DIR]`. When `LOG_DIR` (absolute) is given, core
//! logging is written there at the build-mode default level.

use clap::Parser;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use taskboard_core::{
    default_log_level, init_logging, ClickOrigin, TaskBinder, TaskFilter, UiEvent, ViewModelSink,
};

/// Interactive task board on stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version)]
struct Args {
    /// Absolute directory for rolling log files; logging stays off when omitted.
    log_dir: Option<PathBuf>,
}

const HELP: &str = "commands: add <text> | toggle <n> | delete <n> | filter <all|active|completed> | show | help | quit";

/// One parsed input line. Positions are 1-based indices into the display.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Filter(String),
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head {
        "add" | "a" => Command::Add(rest.to_string()),
        "toggle" | "t" => parse_position(rest).map_or_else(|| unknown(line), Command::Toggle),
        "delete" | "d" => parse_position(rest).map_or_else(|| unknown(line), Command::Delete),
        "filter" | "f" => Command::Filter(rest.to_string()),
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => unknown(line),
    }
}

fn parse_position(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|position| *position > 0)
}

fn unknown(line: &str) -> Command {
    Command::Unknown(line.to_string())
}

/// Maps a displayed position to the click a pointer would produce there.
fn click_at(view: &ViewModelSink, position: usize, on_delete_control: bool) -> ClickOrigin {
    let item_id = position
        .checked_sub(1)
        .and_then(|index| view.items.get(index))
        .map(|item| item.id);
    ClickOrigin {
        item_id,
        on_delete_control,
    }
}

fn to_event(command: Command, view: &ViewModelSink) -> Option<UiEvent> {
    match command {
        Command::Add(entry_text) => Some(UiEvent::AddClicked { entry_text }),
        Command::Toggle(position) => Some(UiEvent::ListClicked(click_at(view, position, false))),
        Command::Delete(position) => Some(UiEvent::ListClicked(click_at(view, position, true))),
        Command::Filter(value) => Some(UiEvent::FilterClicked { value }),
        Command::Show | Command::Help | Command::Quit | Command::Unknown(_) => None,
    }
}

fn render(view: &ViewModelSink, out: &mut impl Write) -> io::Result<()> {
    let controls = TaskFilter::CONTROLS
        .iter()
        .map(|filter| {
            if view.is_filter_active(*filter) {
                format!("[{filter}]")
            } else {
                filter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "filter: {controls}")?;

    if view.empty_visible {
        writeln!(out, "  (no tasks yet)")?;
    }
    for (index, item) in view.items.iter().enumerate() {
        let mark = if item.completed { 'x' } else { ' ' };
        writeln!(out, "  {}. [{mark}] {}", index + 1, item.text)?;
    }
    Ok(())
}

fn run(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut board = TaskBinder::new(ViewModelSink::new());
    writeln!(out, "{HELP}")?;
    render(board.sink(), out)?;

    for line in input.lines() {
        let command = parse_command(&line?);
        match &command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Unknown(text) => {
                debug!("event=command_parse module=cli status=ignored reason=unknown_command");
                writeln!(out, "unknown command: {text}")?;
                continue;
            }
            _ => {}
        }
        if let Some(event) = to_event(command, board.sink()) {
            board.handle(event);
        }
        render(board.sink(), out)?;
    }
    out.flush()
}

fn start_logging(log_dir: &Path) -> Result<(), String> {
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", log_dir.display()))?;
    init_logging(default_log_level(), log_dir)
}

fn main() {
    let args = Args::parse();
    if let Some(log_dir) = &args.log_dir {
        if let Err(err) = start_logging(log_dir) {
            eprintln!("taskboard: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), &mut stdout.lock()) {
        eprintln!("taskboard: {err}");
        std::process::exit(1);
    }
}
