//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which wraps the rendered tree in
//! a fenced code block, ready to paste into a prompt or a document.

use std::io::{self, Write};

use crate::tree::{Line, LineSink};

use super::config::OutputConfig;

/// Markdown output formatter - buffers the tree inside a code fence.
pub struct MarkdownFormatter {
    output: String,
    closed: bool,
}

impl MarkdownFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            output: format!("```{}\n", config.fence_language),
            closed: false,
        }
    }

    /// Get the formatted output string.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take ownership of the output string.
    pub fn into_output(self) -> String {
        self.output
    }
}

impl LineSink for MarkdownFormatter {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.output.push_str(&line.to_string());
        self.output.push('\n');
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if !self.closed {
            self.output.push_str("```\n");
            self.closed = true;
        }
        Ok(())
    }
}

/// Print markdown output to stdout.
pub fn print_markdown(formatter: &MarkdownFormatter) -> io::Result<()> {
    write_markdown(&mut io::stdout().lock(), formatter)
}

/// Write markdown output to `out`.
pub fn write_markdown<W: Write>(out: &mut W, formatter: &MarkdownFormatter) -> io::Result<()> {
    out.write_all(formatter.output().as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_markdown_fences_lines() {
        let mut formatter = MarkdownFormatter::new(OutputConfig::default());
        formatter
            .emit(&Line::Header {
                path: PathBuf::from("/proj/Cargo.toml"),
                is_dir: false,
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(formatter.output(), "```text\n/proj/Cargo.toml\n```\n");
    }

    #[test]
    fn test_markdown_finish_is_idempotent() {
        let mut formatter = MarkdownFormatter::new(OutputConfig {
            fence_language: String::new(),
            ..Default::default()
        });
        formatter.finish().unwrap();
        formatter.finish().unwrap();
        assert_eq!(formatter.into_output(), "```\n```\n");
    }

    #[test]
    fn test_write_markdown_propagates_write_errors() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut formatter = MarkdownFormatter::new(OutputConfig::default());
        formatter.finish().unwrap();

        let mut out = Vec::new();
        write_markdown(&mut out, &formatter).unwrap();
        assert_eq!(out, formatter.output().as_bytes());

        let err = write_markdown(&mut ClosedPipe, &formatter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
