//! The "Getting Started" section of a help document.

use serde::Serialize;

use super::section::{BulletedSection, Section};
use crate::metadata::LinkCategory;
use crate::templating::{
    ADDITIONAL_LINKS_TEMPLATE, GUIDES_TEMPLATE, REFERENCE_DOCUMENTATION_TEMPLATE, TemplateError,
    TemplateRenderer,
};

/// A rendered link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GettingStartedLink {
    pub href: String,
    pub description: String,
}

impl GettingStartedLink {
    pub fn new(href: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            description: description.into(),
        }
    }
}

/// Reference documentation, guides and additional links, each an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GettingStartedSection {
    reference_docs: BulletedSection<GettingStartedLink>,
    guides: BulletedSection<GettingStartedLink>,
    additional_links: BulletedSection<GettingStartedLink>,
}

impl Default for GettingStartedSection {
    fn default() -> Self {
        Self::new()
    }
}

impl GettingStartedSection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference_docs: BulletedSection::new(REFERENCE_DOCUMENTATION_TEMPLATE, "items"),
            guides: BulletedSection::new(GUIDES_TEMPLATE, "items"),
            additional_links: BulletedSection::new(ADDITIONAL_LINKS_TEMPLATE, "items"),
        }
    }

    /// True when none of the three lists has an entry.
    pub fn is_empty(&self) -> bool {
        self.reference_docs.is_empty() && self.guides.is_empty() && self.additional_links.is_empty()
    }

    pub fn reference_docs(&self) -> &BulletedSection<GettingStartedLink> {
        &self.reference_docs
    }

    pub fn guides(&self) -> &BulletedSection<GettingStartedLink> {
        &self.guides
    }

    pub fn additional_links(&self) -> &BulletedSection<GettingStartedLink> {
        &self.additional_links
    }

    /// The list that links of `category` are added to.
    pub fn links(&self, category: LinkCategory) -> &BulletedSection<GettingStartedLink> {
        match category {
            LinkCategory::Reference => &self.reference_docs,
            LinkCategory::Guide => &self.guides,
            LinkCategory::Other => &self.additional_links,
        }
    }

    pub fn add_link(
        &mut self,
        category: LinkCategory,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        let section = match category {
            LinkCategory::Reference => &mut self.reference_docs,
            LinkCategory::Guide => &mut self.guides,
            LinkCategory::Other => &mut self.additional_links,
        };
        section.add_item(GettingStartedLink::new(href, description));
        self
    }

    pub fn add_reference_doc_link(
        &mut self,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_link(LinkCategory::Reference, href, description)
    }

    pub fn add_guide_link(
        &mut self,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_link(LinkCategory::Guide, href, description)
    }

    pub fn add_additional_link(
        &mut self,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_link(LinkCategory::Other, href, description)
    }
}

impl Section for GettingStartedSection {
    fn is_empty(&self) -> bool {
        GettingStartedSection::is_empty(self)
    }

    fn render(&self, renderer: &TemplateRenderer) -> Result<String, TemplateError> {
        if self.is_empty() {
            return Ok(String::new());
        }
        let mut rendered = String::from("# Getting Started\n\n");
        for section in [&self.reference_docs, &self.guides, &self.additional_links] {
            rendered.push_str(&section.render(renderer)?);
        }
        Ok(rendered)
    }
}
