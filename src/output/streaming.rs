//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each line as soon
//! as the renderer emits it, for use with `TreeRenderer::render_into`.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Line, LineSink};

use super::config::OutputConfig;

/// Streaming output formatter - colors directories, elisions and diagnostics.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
            write!(self.out, "{}", text)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", text)
        }
    }
}

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

impl<W: WriteColor> LineSink for StreamingFormatter<W> {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        match line {
            Line::Header { .. } => {
                self.write_colored(&line.to_string(), &dir_spec())?;
            }
            Line::Entry {
                prefix,
                name,
                is_dir,
                is_last,
            } => {
                write!(self.out, "{}{}", prefix, Line::connector(*is_last))?;
                if *is_dir {
                    let shown = format!("{}{}", name, std::path::MAIN_SEPARATOR);
                    self.write_colored(&shown, &dir_spec())?;
                } else {
                    write!(self.out, "{}", name)?;
                }
            }
            Line::Elided { prefix } => {
                write!(self.out, "{}", prefix)?;
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Yellow));
                self.write_colored(crate::tree::ELISION_MARKER, &spec)?;
            }
            Line::Diagnostic { prefix, error } => {
                write!(self.out, "{}", prefix)?;
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Red));
                self.write_colored(&error.to_string(), &spec)?;
            }
        }
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
