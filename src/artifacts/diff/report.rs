//! Comparator report classification
//!
//! A comparator report is plain text. Difference lines start with a
//! three-character tag followed by a space and the record:
//!
//! - `I - <record>`: the record exists only in the source dataset
//! - `D - <record>`: the record exists only in the change dataset
//!
//! Every other line (headers, summaries, blank lines) is ignored. The record
//! is cut out of a tagged line through a fixed [`ContentWindow`], which
//! matches fixed-format records of 80 columns by default.

use derive_new::new;
use tracing::debug;

pub const TAG_LENGTH: usize = 3;
pub const DEFAULT_CONTENT_OFFSET: usize = 4;
pub const DEFAULT_RECORD_WIDTH: usize = 80;

pub const TAGS: phf::Map<&'static str, Tag> = phf::phf_map! {
    "I -" => Tag::Inserted,
    "D -" => Tag::Deleted,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Record only present in the source dataset.
    Inserted,
    /// Record only present in the change dataset.
    Deleted,
}

impl Tag {
    /// Recognize the tag at the start of a report line.
    pub fn of(line: &str) -> Option<Tag> {
        line.get(..TAG_LENGTH)
            .and_then(|prefix| TAGS.get(prefix))
            .copied()
    }

    /// Line prefix used when rendering a report.
    pub fn prefix(&self) -> &'static str {
        match self {
            Tag::Inserted => "I - ",
            Tag::Deleted => "D - ",
        }
    }
}

/// Character window holding the record inside a tagged line
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ContentWindow {
    offset: usize,
    width: usize,
}

impl Default for ContentWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_OFFSET, DEFAULT_RECORD_WIDTH)
    }
}

impl ContentWindow {
    pub fn with_width(width: usize) -> Self {
        Self::new(DEFAULT_CONTENT_OFFSET, width)
    }

    /// Characters `[offset, offset + width)` of the line.
    ///
    /// Short lines yield a shorter, possibly empty, record.
    pub fn extract(&self, line: &str) -> String {
        line.chars().skip(self.offset).take(self.width).collect()
    }
}

/// Records of a report split by the side they belong to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLines {
    pub source_lines: Vec<String>,
    pub change_lines: Vec<String>,
}

impl ClassifiedLines {
    pub fn is_empty(&self) -> bool {
        self.source_lines.is_empty() && self.change_lines.is_empty()
    }

    pub fn lines(&self, tag: Tag) -> &[String] {
        match tag {
            Tag::Inserted => &self.source_lines,
            Tag::Deleted => &self.change_lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ComparisonReport {
    text: String,
}

impl ComparisonReport {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn tagged_lines(&self) -> impl Iterator<Item = (Tag, &str)> {
        self.lines()
            .filter_map(|line| Tag::of(line).map(|tag| (tag, line)))
    }

    /// Single pass over the report, keeping report order on both sides.
    pub fn classify(&self, window: ContentWindow) -> ClassifiedLines {
        let classified = self.tagged_lines().fold(
            ClassifiedLines::default(),
            |mut classified, (tag, line)| {
                let content = window.extract(line);
                match tag {
                    Tag::Inserted => classified.source_lines.push(content),
                    Tag::Deleted => classified.change_lines.push(content),
                }
                classified
            },
        );

        debug!(
            source_lines = classified.source_lines.len(),
            change_lines = classified.change_lines.len(),
            "classified comparison report"
        );

        classified
    }
}
