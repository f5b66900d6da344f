//! Console collaborator contract.
//!
//! Commands never talk to stdout directly; they go through [`ReplConsole`] so
//! the shell can be driven by a real terminal or by a recording double.

use async_trait::async_trait;
use crossterm::style::Color;
use std::io;

/// Named colors used by the shell's styled output.
pub mod palette {
    use crossterm::style::Color;

    /// Structural text of error messages.
    pub const FIREBRICK: Color = Color::Rgb {
        r: 0xB2,
        g: 0x22,
        b: 0x22,
    };

    /// Highlighted user input inside error messages.
    pub const MEDIUM_SLATE_BLUE: Color = Color::Rgb {
        r: 0x7B,
        g: 0x68,
        b: 0xEE,
    };

    /// Warning channel.
    pub const WARNING: Color = Color::Yellow;

    /// Error channel.
    pub const ERROR: Color = Color::Red;
}

/// Line-oriented console used by the shell loop and by every command.
#[async_trait]
pub trait ReplConsole: Send + Sync {
    /// Sets the terminal window title.
    fn set_title(&self, title: &str) -> io::Result<()>;

    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input, which is distinct from an empty line.
    async fn read_line(&self) -> io::Result<Option<String>>;

    /// Writes text without a trailing newline.
    fn write(&self, text: &str);

    /// Writes text in the given foreground color.
    fn write_colored(&self, text: &str, color: Color);

    /// Writes a line.
    fn write_line(&self, line: &str);

    /// Writes a line in the given foreground color.
    fn write_line_colored(&self, line: &str, color: Color);

    /// Writes a line on the warning channel.
    fn write_warning(&self, message: &str) {
        self.write_line_colored(message, palette::WARNING);
    }

    /// Writes a line on the error channel.
    fn write_error(&self, message: &str) {
        self.write_line_colored(message, palette::ERROR);
    }

    /// Clears the whole display and homes the cursor.
    fn clear(&self);
}
