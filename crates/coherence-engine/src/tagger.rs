//! Paragraph tagging against the pattern catalog

use crate::patterns::{Tag, TagSet};
use shared_types::Paragraph;

/// A paragraph together with the catalog tags found in its own text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedParagraph {
    pub paragraph: Paragraph,
    pub tags: TagSet,
}

impl TaggedParagraph {
    pub fn new(paragraph: Paragraph) -> Self {
        let tags = TagSet::of(&paragraph.text);
        Self { paragraph, tags }
    }

    pub fn ordinal(&self) -> usize {
        self.paragraph.ordinal
    }

    pub fn text(&self) -> &str {
        &self.paragraph.text
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags.has(tag)
    }

    /// True when every tag in `all` is present
    pub fn has_all(&self, all: &[Tag]) -> bool {
        all.iter().all(|tag| self.has(*tag))
    }

    /// True when at least one tag in `any` is present
    pub fn has_any(&self, any: &[Tag]) -> bool {
        any.iter().any(|tag| self.has(*tag))
    }
}

pub fn tag_paragraphs(paragraphs: Vec<Paragraph>) -> Vec<TaggedParagraph> {
    paragraphs.into_iter().map(TaggedParagraph::new).collect()
}
