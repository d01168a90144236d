//! Turning resolved notes into styled report text

use serde::Serialize;

use super::resolver::ResolvedParent;
use super::sink::{Alignment, StyledSink, TextStyle};
use crate::config::StyleConfig;
use crate::model::{Note, ParentKind};

/// A note ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNote {
    pub note: Note,
    pub parent: ResolvedParent,
}

/// Heading information shown above the notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub search_text: Option<String>,
    pub config_name: Option<String>,
}

/// Logical unit of report output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Subtitle { text: String },
    ConfigLabel { text: String },
    NoteHeader { num: i64, id: String },
    ParentLine { kind: ParentKind, value: String },
    AuthorLine { author: String },
    BodyText { text: String },
}

pub struct ReportRenderer<'a> {
    style: &'a StyleConfig,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Blocks for the whole report, notes in the order given
    pub fn blocks(&self, header: &ReportHeader, notes: &[ResolvedNote]) -> Vec<Block> {
        let mut blocks = vec![Block::Title {
            text: header.title.clone(),
        }];

        if let Some(search) = &header.search_text {
            blocks.push(Block::Subtitle {
                text: format!("Search Text: {}", search),
            });
        }
        if let Some(name) = header.config_name.as_deref().filter(|n| !n.is_empty()) {
            blocks.push(Block::ConfigLabel {
                text: format!("Filter Configuration: {}", name),
            });
        }

        for resolved in notes {
            let note = &resolved.note;
            blocks.push(Block::NoteHeader {
                num: note.num,
                id: note.id.clone(),
            });
            blocks.extend(resolved.parent.lines().map(|(kind, value)| Block::ParentLine {
                kind,
                value: value.to_string(),
            }));
            blocks.push(Block::AuthorLine {
                author: note.author.clone(),
            });
            blocks.push(Block::BodyText {
                text: note.text.trim_end().to_string(),
            });
        }

        blocks
    }

    fn base(&self, size: u16) -> TextStyle {
        TextStyle::new(&self.style.font, size)
    }

    fn labelled_line(&self, sink: &mut dyn StyledSink, label: &str, value: &str) {
        let line = self.base(self.style.body_size).indent(self.style.parent_indent);
        sink.set_style(&line.clone().bold(true));
        sink.write(label);
        sink.set_style(&line);
        sink.write(value);
        sink.newline();
    }

    /// Write `blocks` to `sink`. The sink is writable only for the duration
    /// of the call.
    pub fn write(&self, blocks: &[Block], sink: &mut dyn StyledSink) {
        sink.set_read_only(false);

        for block in blocks {
            match block {
                Block::Title { text } => {
                    sink.set_style(
                        &self
                            .base(self.style.title_size)
                            .bold(true)
                            .underline(true)
                            .align(Alignment::Center)
                            .spacing(0, 12),
                    );
                    sink.write(text);
                    sink.newline();
                }
                Block::Subtitle { text } | Block::ConfigLabel { text } => {
                    sink.set_style(
                        &self
                            .base(self.style.subtitle_size)
                            .align(Alignment::Center),
                    );
                    sink.write(text);
                    sink.newline();
                }
                Block::NoteHeader { id, .. } => {
                    sink.set_style(&self.base(self.style.header_size).bold(true).spacing(36, 12));
                    sink.write(id);
                    sink.newline();
                }
                Block::ParentLine { kind, value } => {
                    self.labelled_line(sink, &format!("{}: ", kind.label()), value);
                }
                Block::AuthorLine { author } => {
                    self.labelled_line(sink, "Note Taker: ", author);
                }
                Block::BodyText { text } => {
                    let heading = self
                        .base(self.style.body_size)
                        .indent(self.style.parent_indent)
                        .bold(true);
                    sink.set_style(&heading);
                    sink.write("Note Text:");
                    sink.newline();
                    sink.set_style(&self.base(self.style.body_size).indent(self.style.body_indent));
                    sink.write(text);
                    sink.newline();
                }
            }
        }

        sink.set_read_only(true);
    }
}
