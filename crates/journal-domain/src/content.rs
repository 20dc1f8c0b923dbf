//! Notes attached to a book: chapters and the sections inside them.
//!
//! Stored books always use the chapter-nested shape. A flat list of
//! sections is kept as a single *implicit* chapter: untitled, without a
//! summary, and never given a placeholder title.

use serde::{Deserialize, Serialize};

/// A titled, summarized note fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub summary: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// A group of sections with its own title and summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Set on the chapter that wraps a flat section list.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub implicit: bool,
}

impl Chapter {
    /// Create an explicit chapter
    pub fn new(id: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            sections: Vec::new(),
            implicit: false,
        }
    }

    /// Wrap a flat section list in an untitled chapter
    pub fn implicit(id: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            summary: String::new(),
            sections,
            implicit: true,
        }
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }
}

/// User input for a section that has not been stored yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    pub summary: String,
}

impl SectionDraft {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// Title and summary are both empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.summary.trim().is_empty()
    }
}

/// User input for a chapter that has not been stored yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDraft {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<SectionDraft>,
}

impl ChapterDraft {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionDraft>) -> Self {
        self.sections = sections;
        self
    }
}

/// Content supplied when a book is created.
///
/// Both forms end up as chapters once the book is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentDraft {
    /// A flat list of sections, stored under one implicit chapter.
    Sections(Vec<SectionDraft>),
    /// Explicit chapters with nested sections.
    Chapters(Vec<ChapterDraft>),
}

impl Default for ContentDraft {
    fn default() -> Self {
        ContentDraft::Sections(Vec::new())
    }
}
