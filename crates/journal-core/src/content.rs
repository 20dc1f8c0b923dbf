//! Tidying user-entered chapters and sections before they are stored.
//!
//! Rules shared by book creation and the book editor:
//! - titles and summaries are trimmed
//! - a section with neither title nor summary is dropped
//! - a chapter with neither title nor summary and no kept section is dropped
//! - a kept unit without a title gets the configured placeholder
//!   (implicit chapters stay untitled)

use journal_domain::{Chapter, ChapterDraft, ContentDraft, Section, SectionDraft};

use crate::config::Labels;
use crate::ids::IdGenerator;

/// Turn creation input into stored chapters, assigning fresh ids to every
/// kept unit.
///
/// A flat section list becomes one implicit chapter, or no chapter at all
/// when every section was blank.
pub fn materialize_content(content: ContentDraft, ids: &dyn IdGenerator, labels: &Labels) -> Vec<Chapter> {
    match content {
        ContentDraft::Sections(drafts) => {
            let sections = materialize_sections(drafts, ids, labels);
            if sections.is_empty() {
                Vec::new()
            } else {
                vec![Chapter::implicit(ids.next_id(), sections)]
            }
        }
        ContentDraft::Chapters(drafts) => drafts
            .into_iter()
            .filter_map(|draft| materialize_chapter(draft, ids, labels))
            .collect(),
    }
}

fn materialize_sections(drafts: Vec<SectionDraft>, ids: &dyn IdGenerator, labels: &Labels) -> Vec<Section> {
    drafts
        .into_iter()
        .filter_map(|draft| tidy_unit(&draft.title, &draft.summary, &labels.untitled_section))
        .map(|(title, summary)| Section::new(ids.next_id(), title, summary))
        .collect()
}

fn materialize_chapter(draft: ChapterDraft, ids: &dyn IdGenerator, labels: &Labels) -> Option<Chapter> {
    let sections = materialize_sections(draft.sections, ids, labels);
    let (title, summary) = tidy_chapter_fields(&draft.title, &draft.summary, !sections.is_empty(), false, labels)?;
    Some(Chapter::new(ids.next_id(), title, summary).with_sections(sections))
}

/// Apply the same rules to chapters that already carry ids (editor output).
pub fn tidy_chapters(chapters: Vec<Chapter>, labels: &Labels) -> Vec<Chapter> {
    chapters
        .into_iter()
        .filter_map(|chapter| {
            let sections: Vec<Section> = chapter
                .sections
                .into_iter()
                .filter_map(|section| {
                    let (title, summary) =
                        tidy_unit(&section.title, &section.summary, &labels.untitled_section)?;
                    Some(Section { title, summary, ..section })
                })
                .collect();
            let (title, summary) = tidy_chapter_fields(
                &chapter.title,
                &chapter.summary,
                !sections.is_empty(),
                chapter.implicit,
                labels,
            )?;
            Some(Chapter {
                id: chapter.id,
                title,
                summary,
                sections,
                implicit: chapter.implicit,
            })
        })
        .collect()
}

/// Trimmed `(title, summary)`, or `None` when both are blank.
fn tidy_unit(title: &str, summary: &str, placeholder: &str) -> Option<(String, String)> {
    let title = title.trim();
    let summary = summary.trim();
    if title.is_empty() && summary.is_empty() {
        return None;
    }
    let title = if title.is_empty() { placeholder } else { title };
    Some((title.to_string(), summary.to_string()))
}

fn tidy_chapter_fields(
    title: &str,
    summary: &str,
    has_sections: bool,
    implicit: bool,
    labels: &Labels,
) -> Option<(String, String)> {
    let title = title.trim();
    let summary = summary.trim();
    if title.is_empty() && summary.is_empty() && !has_sections {
        return None;
    }
    let title = if title.is_empty() && !implicit {
        labels.untitled_chapter.as_str()
    } else {
        title
    };
    Some((title.to_string(), summary.to_string()))
}

/// Trim tags and drop the empty ones.
pub fn tidy_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
