//! Editable copy of a book's notes
//!
//! A [`BookDraft`] is edited freely and compared against the stored book.
//! Saving turns it into a [`BookUpdate`] with the same tidying rules that
//! book creation applies.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use journal_domain::{Book, BookUpdate, Chapter, Section};

use crate::config::Labels;
use crate::content::{tidy_chapters, tidy_tags};

/// Which text field of a chapter or section to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Title,
    Summary,
}

/// Editor state for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub description: String,
    /// Comma-separated tags as typed
    pub tags_input: String,
    pub chapters: Vec<Chapter>,
}

impl BookDraft {
    pub fn from_book(book: &Book) -> Self {
        Self {
            description: book.description.clone(),
            tags_input: book.tags.join(", "),
            chapters: book.chapters.clone(),
        }
    }

    /// Whether saving would change the book.
    ///
    /// Tags compare as case-insensitive sets, surrounding whitespace is
    /// ignored everywhere, and chapter and section ids do not matter.
    pub fn is_dirty(&self, book: &Book) -> bool {
        let same_description = self.description.trim() == book.description.trim();
        let same_tags = tag_set(self.tags_input.split(',')) == tag_set(&book.tags);
        let same_chapters = comparable(&self.chapters) == comparable(&book.chapters);
        !(same_description && same_tags && same_chapters)
    }

    /// The update to dispatch on save.
    pub fn to_update(&self, labels: &Labels) -> BookUpdate {
        BookUpdate::new()
            .description(self.description.trim())
            .tags(tidy_tags(self.tags_input.split(',')))
            .chapters(tidy_chapters(self.chapters.clone(), labels))
    }

    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Returns false when no chapter has the id.
    pub fn remove_chapter(&mut self, chapter_id: &str) -> bool {
        let before = self.chapters.len();
        self.chapters.retain(|c| c.id != chapter_id);
        self.chapters.len() != before
    }

    pub fn add_section(&mut self, chapter_id: &str, section: Section) -> bool {
        match self.chapter_mut(chapter_id) {
            Some(chapter) => {
                chapter.sections.push(section);
                true
            }
            None => false,
        }
    }

    pub fn remove_section(&mut self, chapter_id: &str, section_id: &str) -> bool {
        let Some(chapter) = self.chapter_mut(chapter_id) else {
            return false;
        };
        let before = chapter.sections.len();
        chapter.sections.retain(|s| s.id != section_id);
        chapter.sections.len() != before
    }

    pub fn set_chapter_field(&mut self, chapter_id: &str, field: DraftField, value: impl Into<String>) -> bool {
        let Some(chapter) = self.chapter_mut(chapter_id) else {
            return false;
        };
        match field {
            DraftField::Title => chapter.title = value.into(),
            DraftField::Summary => chapter.summary = value.into(),
        }
        true
    }

    pub fn set_section_field(
        &mut self,
        chapter_id: &str,
        section_id: &str,
        field: DraftField,
        value: impl Into<String>,
    ) -> bool {
        let Some(section) = self
            .chapter_mut(chapter_id)
            .and_then(|c| c.sections.iter_mut().find(|s| s.id == section_id))
        else {
            return false;
        };
        match field {
            DraftField::Title => section.title = value.into(),
            DraftField::Summary => section.summary = value.into(),
        }
        true
    }

    fn chapter_mut(&mut self, chapter_id: &str) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id == chapter_id)
    }
}

fn tag_set<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tidy_tags(tags).into_iter().map(|t| t.to_lowercase()).collect()
}

type Unit<'a> = (&'a str, &'a str);

fn comparable(chapters: &[Chapter]) -> Vec<(Unit<'_>, Vec<Unit<'_>>)> {
    chapters
        .iter()
        .map(|c| {
            let sections = c.sections.iter().map(|s| (s.title.trim(), s.summary.trim())).collect();
            ((c.title.trim(), c.summary.trim()), sections)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn book() -> Book {
        let stamp: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        Book {
            id: "b1".into(),
            title: "Interface Atlas".into(),
            author: "Monica Zhang".into(),
            genre_id: "genre-design".into(),
            description: "Patterns".into(),
            tags: vec!["design systems".into(), "ui".into()],
            chapters: vec![Chapter::new("c1", "Part One", "")
                .with_sections(vec![Section::new("s1", "Case Studies", "Redesigns")])],
            created_at: stamp,
            updated_at: stamp,
            cover_color: "#00cec9".into(),
        }
    }

    #[test]
    fn fresh_draft_is_clean() {
        let book = book();
        let draft = BookDraft::from_book(&book);
        assert_eq!(draft.tags_input, "design systems, ui");
        assert!(!draft.is_dirty(&book));
    }

    #[test]
    fn cosmetic_edits_stay_clean() {
        let book = book();
        let mut draft = BookDraft::from_book(&book);
        draft.description = "  Patterns \n".into();
        draft.tags_input = "UI ,  Design Systems,".into();
        draft.set_section_field("c1", "s1", DraftField::Summary, " Redesigns ");
        draft.chapters[0].id = "renumbered".into();
        assert!(!draft.is_dirty(&book));
    }

    #[test]
    fn real_edits_are_dirty() {
        let book = book();

        let mut draft = BookDraft::from_book(&book);
        draft.tags_input.push_str(", accessibility");
        assert!(draft.is_dirty(&book));

        let mut draft = BookDraft::from_book(&book);
        assert!(draft.set_chapter_field("c1", DraftField::Title, "Part 1"));
        assert!(draft.is_dirty(&book));

        let mut draft = BookDraft::from_book(&book);
        assert!(draft.add_section("c1", Section::new("s2", "", "")));
        assert!(draft.is_dirty(&book));
    }

    #[test]
    fn to_update_tidies_content() {
        let book = book();
        let mut draft = BookDraft::from_book(&book);
        draft.description = " New ".into();
        draft.tags_input = " ui, , habits ".into();
        draft.add_chapter(Chapter::new("c2", "", "").with_sections(vec![Section::new("s9", "", "")]));
        draft.add_section("c1", Section::new("s3", "", "only summary"));

        let update = draft.to_update(&Labels::default());
        assert_eq!(update.description.as_deref(), Some("New"));
        assert_eq!(update.tags, Some(vec!["ui".to_string(), "habits".to_string()]));

        let chapters = update.chapters.unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].sections[1].title, "Untitled Section");
        assert!(update.title.is_none());
    }

    #[test]
    fn edits_on_missing_units_report_false() {
        let mut draft = BookDraft::from_book(&book());
        assert!(!draft.remove_chapter("nope"));
        assert!(!draft.remove_section("c1", "nope"));
        assert!(!draft.set_section_field("nope", "s1", DraftField::Title, "x"));
        assert!(draft.remove_section("c1", "s1"));
        assert!(draft.remove_chapter("c1"));
        assert!(draft.chapters.is_empty());
    }
}
