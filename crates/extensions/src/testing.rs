//! Recording doubles for the console and host collaborators.

use crate::console::ReplConsole;
use crate::host::ProcessHost;
use async_trait::async_trait;
use crossterm::style::Color;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io;
use tokio_util::sync::CancellationToken;

/// One call made against a [`RecordingConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Title(String),
    Write(String),
    WriteColored(String, Color),
    WriteLine(String),
    WriteLineColored(String, Color),
    Warning(String),
    Error(String),
    Clear,
}

/// Console that records output and replays scripted input.
///
/// Once the scripted lines run out, reads report end of input.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    input: Mutex<VecDeque<String>>,
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().clone()
    }

    /// Text of every `write_line` call, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::WriteLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// All written text concatenated, ignoring colors and channels.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for event in self.events.lock().iter() {
            match event {
                ConsoleEvent::Write(text) | ConsoleEvent::WriteColored(text, _) => {
                    out.push_str(text)
                }
                ConsoleEvent::WriteLine(text)
                | ConsoleEvent::WriteLineColored(text, _)
                | ConsoleEvent::Warning(text)
                | ConsoleEvent::Error(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                ConsoleEvent::Title(_) | ConsoleEvent::Clear => {}
            }
        }
        out
    }

    pub fn clear_events(&self) {
        self.events.lock().clear();
    }

    fn record(&self, event: ConsoleEvent) {
        self.events.lock().push(event);
    }
}

#[async_trait]
impl ReplConsole for RecordingConsole {
    fn set_title(&self, title: &str) -> io::Result<()> {
        self.record(ConsoleEvent::Title(title.to_string()));
        Ok(())
    }

    async fn read_line(&self) -> io::Result<Option<String>> {
        Ok(self.input.lock().pop_front())
    }

    fn write(&self, text: &str) {
        self.record(ConsoleEvent::Write(text.to_string()));
    }

    fn write_colored(&self, text: &str, color: Color) {
        self.record(ConsoleEvent::WriteColored(text.to_string(), color));
    }

    fn write_line(&self, line: &str) {
        self.record(ConsoleEvent::WriteLine(line.to_string()));
    }

    fn write_line_colored(&self, line: &str, color: Color) {
        self.record(ConsoleEvent::WriteLineColored(line.to_string(), color));
    }

    fn write_warning(&self, message: &str) {
        self.record(ConsoleEvent::Warning(message.to_string()));
    }

    fn write_error(&self, message: &str) {
        self.record(ConsoleEvent::Error(message.to_string()));
    }

    fn clear(&self) {
        self.record(ConsoleEvent::Clear);
    }
}

/// Host that records exit requests instead of terminating the process.
///
/// An exit request also cancels the host token, so a shell loop driven by
/// this host stops the way it would when the real process ends.
#[derive(Debug, Default)]
pub struct RecordingHost {
    token: CancellationToken,
    exit_codes: Mutex<Vec<i32>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_codes(&self) -> Vec<i32> {
        self.exit_codes.lock().clone()
    }
}

impl ProcessHost for RecordingHost {
    fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    fn exit(&self, code: i32) {
        self.exit_codes.lock().push(code);
        self.token.cancel();
    }
}
