use std::io::{self, Write};

use crate::core::ports::UserInteraction;

pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    fn write_line<W: Write>(write: &mut W, message: &str) -> io::Result<()> {
        writeln!(write, "{message}")?;
        write.flush()
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for TerminalInteraction {
    fn print(&self, message: &str) {
        // A closed stdout (e.g. `| head`) is not worth failing over
        let _ = Self::write_line(&mut io::stdout().lock(), message);
    }

    fn print_error(&self, message: &str) {
        let _ = Self::write_line(&mut io::stderr().lock(), message);
    }
}
