//! Styled text output
//!
//! The renderer talks to a [`StyledSink`]: an append-only stream of text
//! runs, each written under the most recently set [`TextStyle`]. Paragraph
//! attributes (alignment, indent, spacing) take effect per line.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Character and paragraph formatting for subsequent writes.
///
/// Indents and spacing are in widget units (tenths of a millimetre for
/// indents, points for spacing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub font: String,
    pub size: u16,
    pub bold: bool,
    pub underline: bool,
    pub alignment: Alignment,
    pub left_indent: u16,
    pub spacing_before: u16,
    pub spacing_after: u16,
}

impl TextStyle {
    pub fn new(font: &str, size: u16) -> Self {
        Self {
            font: font.to_string(),
            size,
            bold: false,
            underline: false,
            alignment: Alignment::Left,
            left_indent: 0,
            spacing_before: 0,
            spacing_after: 0,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn indent(mut self, left_indent: u16) -> Self {
        self.left_indent = left_indent;
        self
    }

    pub fn spacing(mut self, before: u16, after: u16) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }
}

/// Destination for a rendered report
pub trait StyledSink {
    /// Discard everything written so far
    fn clear(&mut self);
    fn set_read_only(&mut self, read_only: bool);
    fn set_style(&mut self, style: &TextStyle);
    fn write(&mut self, text: &str);
    fn newline(&mut self);
}

/// One call made against a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    ReadOnly(bool),
    Style(TextStyle),
    Write(String),
    Newline,
}

/// Sink that keeps every call, for headless inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Written text with newlines, styles dropped
    pub fn text(&self) -> String {
        let mut text = String::new();
        for event in &self.events {
            match event {
                SinkEvent::Write(s) => text.push_str(s),
                SinkEvent::Newline => text.push('\n'),
                SinkEvent::ReadOnly(_) | SinkEvent::Style(_) => {}
            }
        }
        text
    }

    /// The text runs written while `bold` was set
    pub fn bold_runs(&self) -> Vec<String> {
        let mut bold = false;
        let mut runs = Vec::new();
        for event in &self.events {
            match event {
                SinkEvent::Style(style) => bold = style.bold,
                SinkEvent::Write(s) if bold => runs.push(s.clone()),
                _ => {}
            }
        }
        runs
    }
}

impl StyledSink for RecordingSink {
    fn clear(&mut self) {
        self.events.clear();
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.events.push(SinkEvent::ReadOnly(read_only));
    }

    fn set_style(&mut self, style: &TextStyle) {
        self.events.push(SinkEvent::Style(style.clone()));
    }

    fn write(&mut self, text: &str) {
        self.events.push(SinkEvent::Write(text.to_string()));
    }

    fn newline(&mut self) {
        self.events.push(SinkEvent::Newline);
    }
}

/// Indent units per output column
const INDENT_UNIT: u16 = 21;

/// Terminal rendering: centering, indents, underlines and paragraph spacing
/// approximated with spaces, rules and blank lines.
#[derive(Debug)]
pub struct PlainTextSink {
    width: usize,
    read_only: bool,
    style: Option<TextStyle>,
    /// Paragraph style of the line being built, fixed by its first write
    line_style: Option<TextStyle>,
    line: String,
    lines: Vec<String>,
}

impl PlainTextSink {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            read_only: false,
            style: None,
            line_style: None,
            line: String::new(),
            lines: Vec::new(),
        }
    }

    /// Rendered text; a partially written last line is included
    pub fn output(&self) -> String {
        let mut lines = self.lines.clone();
        if !self.line.is_empty() {
            let style = self.line_style.clone().or_else(|| self.style.clone());
            Self::layout(&mut lines, &self.line, style.as_ref(), self.width);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn push_blank(lines: &mut Vec<String>) {
        if lines.last().is_some_and(|l| !l.is_empty()) {
            lines.push(String::new());
        }
    }

    fn layout(lines: &mut Vec<String>, text: &str, style: Option<&TextStyle>, width: usize) {
        let Some(style) = style else {
            lines.push(text.to_string());
            return;
        };

        if style.spacing_before > 0 {
            Self::push_blank(lines);
        }

        let text_len = text.chars().count();
        let pad = match style.alignment {
            Alignment::Center => width.saturating_sub(text_len) / 2,
            Alignment::Left => usize::from(style.left_indent / INDENT_UNIT),
        };
        let prefix = " ".repeat(pad);
        lines.push(format!("{}{}", prefix, text));

        if style.underline && text_len > 0 {
            lines.push(format!("{}{}", prefix, "=".repeat(text_len)));
        }
        if style.spacing_after > 0 {
            Self::push_blank(lines);
        }
    }

    fn end_line(&mut self) {
        let style = self.line_style.take().or_else(|| self.style.clone());
        let line = std::mem::take(&mut self.line);
        Self::layout(&mut self.lines, &line, style.as_ref(), self.width);
    }
}

impl StyledSink for PlainTextSink {
    fn clear(&mut self) {
        self.line.clear();
        self.lines.clear();
        self.line_style = None;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn set_style(&mut self, style: &TextStyle) {
        self.style = Some(style.clone());
    }

    fn write(&mut self, text: &str) {
        if self.read_only {
            tracing::warn!("write to read-only sink ignored");
            return;
        }
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.end_line();
            }
            if self.line_style.is_none() {
                self.line_style = self.style.clone();
            }
            self.line.push_str(segment);
        }
    }

    fn newline(&mut self) {
        if self.read_only {
            tracing::warn!("newline on read-only sink ignored");
            return;
        }
        self.end_line();
    }
}
