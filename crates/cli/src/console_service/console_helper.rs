//! Terminal-backed [`ReplConsole`].

use async_trait::async_trait;
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, SetTitle},
};
use repl_extensions::{palette, ReplConsole};
use std::io::{self, BufRead, Write};
use std::thread;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

type LineResult = io::Result<Option<String>>;

/// Console writing to stdout and reading lines from stdin.
///
/// Styled output is only emitted when colors are enabled; otherwise colored
/// writes fall back to plain text so redirected output stays clean.
///
/// Stdin is read on a detached thread that hands lines over a channel, so an
/// abandoned read never keeps the process alive after the shell stops.
pub struct TerminalConsole {
    colors_enabled: bool,
    lines: Mutex<mpsc::Receiver<LineResult>>,
}

impl TerminalConsole {
    pub fn new(colors_enabled: bool) -> io::Result<Self> {
        Ok(Self::with_reader(colors_enabled, spawn_stdin_reader()?))
    }

    fn with_reader(colors_enabled: bool, lines: mpsc::Receiver<LineResult>) -> Self {
        Self {
            colors_enabled,
            lines: Mutex::new(lines),
        }
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    fn emit(&self, text: &str, color: Option<Color>, newline: bool) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = write_styled(&mut stdout, text, self.effective(color), newline) {
            warn!(error = %err, "failed to write to console");
        }
    }

    fn effective(&self, color: Option<Color>) -> Option<Color> {
        color.filter(|_| self.colors_enabled)
    }
}

#[async_trait]
impl ReplConsole for TerminalConsole {
    fn set_title(&self, title: &str) -> io::Result<()> {
        execute!(io::stdout(), SetTitle(title))
    }

    async fn read_line(&self) -> io::Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        // A closed channel means the reader already reported end of input.
        lines.recv().await.unwrap_or(Ok(None))
    }

    fn write(&self, text: &str) {
        self.emit(text, None, false);
    }

    fn write_colored(&self, text: &str, color: Color) {
        self.emit(text, Some(color), false);
    }

    fn write_line(&self, line: &str) {
        self.emit(line, None, true);
    }

    fn write_line_colored(&self, line: &str, color: Color) {
        self.emit(line, Some(color), true);
    }

    fn write_warning(&self, message: &str) {
        self.emit(message, Some(palette::WARNING), true);
    }

    fn write_error(&self, message: &str) {
        self.emit(message, Some(palette::ERROR), true);
    }

    fn clear(&self) {
        if let Err(err) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(error = %err, "failed to clear console");
        }
    }
}

fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<LineResult>> {
    let (tx, rx) = mpsc::channel(1);
    thread::Builder::new()
        .name("repl-stdin".to_string())
        .spawn(move || read_lines(io::stdin().lock(), &tx))?;
    Ok(rx)
}

/// Forwards lines until end of input, a read error, or the receiver is gone.
fn read_lines(mut input: impl BufRead, tx: &mpsc::Sender<LineResult>) {
    loop {
        let mut line = String::new();
        let next = match input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(trim_newline(line))),
            Err(err) => Err(err),
        };
        let done = !matches!(next, Ok(Some(_)));
        if tx.blocking_send(next).is_err() || done {
            debug!("stdin reader stopped");
            return;
        }
    }
}

fn write_styled(
    out: &mut impl Write,
    text: &str,
    color: Option<Color>,
    newline: bool,
) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor)?,
        None => queue!(out, Print(text))?,
    }
    if newline {
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn trim_newline(mut value: String) -> String {
    while value.ends_with(['\n', '\r']) {
        value.pop();
    }
    value
}
