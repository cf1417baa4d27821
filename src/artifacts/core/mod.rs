//! Core utilities and shared types

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Destination of a command's output
///
/// Long dataset listings go through the minus pager when stdout is an
/// interactive terminal; everything else is written straight to stdout.
pub enum OutputTarget {
    Stdout,
    Pager(Pager),
}

impl OutputTarget {
    pub fn detect(paging: bool) -> Self {
        if paging && io::stdout().is_terminal() {
            OutputTarget::Pager(Pager::new())
        } else {
            OutputTarget::Stdout
        }
    }

    pub fn is_terminal() -> bool {
        io::stdout().is_terminal()
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Pager(pager) => Box::new(PagerWriter(pager.clone())),
        }
    }

    /// Hand the collected output to the pager, if any.
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            OutputTarget::Stdout => io::stdout().flush()?,
            OutputTarget::Pager(pager) => minus::page_all(pager)?,
        }

        Ok(())
    }
}

// minus::Pager has no `Write` impl of its own
struct PagerWriter(Pager);

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.0.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
