//! Console report formatting

use crate::{NwsError, Result};
use std::io::Write;

const RULE_WIDTH: usize = 60;

/// Writes the human readable report to any sink
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Title framed by `=` rules
    pub fn banner(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    /// Banner preceded by a blank line
    pub fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.out)?;
        self.banner(title)
    }

    /// Thin `-` rule under a heading
    pub fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn line<S: AsRef<str>>(&mut self, text: S) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn status(&mut self, status: u16) -> Result<()> {
        self.line(format!("Status Code: {status}"))
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.line(format!("✅ {message}"))
    }

    pub fn failure(&mut self, message: &str) -> Result<()> {
        self.line(format!("❌ {message}"))
    }

    /// Top-level failure: message, a hint for known failures, then the error
    /// chain and backtrace (when `RUST_BACKTRACE` enables capture)
    pub fn error(&mut self, error: &anyhow::Error) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "❌ Error occurred: {error}")?;
        if let Some(cause) = error.downcast_ref::<NwsError>() {
            writeln!(self.out, "Hint: {}", cause.user_message())?;
        }
        writeln!(self.out, "{error:?}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
