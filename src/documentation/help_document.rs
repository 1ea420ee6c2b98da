//! The HELP.md document of a generated project.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

use super::getting_started::GettingStartedSection;
use super::section::{BulletedSection, Section};
use crate::templating::{NEXT_STEPS_TEMPLATE, TemplateError, TemplateRenderer, WARNINGS_TEMPLATE};

/// In-memory help document, populated by customizers and rendered once.
///
/// Sections render in this order: warnings ("Read Me First"), getting
/// started, extra sections in insertion order, next steps.
pub struct HelpDocument {
    warnings: BulletedSection<String>,
    getting_started: GettingStartedSection,
    sections: Vec<Box<dyn Section>>,
    next_steps: BulletedSection<String>,
}

impl Default for HelpDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDocument {
    #[must_use]
    pub fn new() -> Self {
        Self {
            warnings: BulletedSection::new(WARNINGS_TEMPLATE, "items"),
            getting_started: GettingStartedSection::new(),
            sections: Vec::new(),
            next_steps: BulletedSection::new(NEXT_STEPS_TEMPLATE, "items"),
        }
    }

    pub fn warnings(&self) -> &BulletedSection<String> {
        &self.warnings
    }

    pub fn warnings_mut(&mut self) -> &mut BulletedSection<String> {
        &mut self.warnings
    }

    pub fn getting_started(&self) -> &GettingStartedSection {
        &self.getting_started
    }

    pub fn getting_started_mut(&mut self) -> &mut GettingStartedSection {
        &mut self.getting_started
    }

    pub fn next_steps(&self) -> &BulletedSection<String> {
        &self.next_steps
    }

    pub fn next_steps_mut(&mut self) -> &mut BulletedSection<String> {
        &mut self.next_steps
    }

    /// Append a section rendered between "Getting Started" and "Next Steps".
    pub fn add_section(&mut self, section: Box<dyn Section>) -> &mut Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
            && self.getting_started.is_empty()
            && self.sections.iter().all(|s| s.is_empty())
            && self.next_steps.is_empty()
    }

    /// Render every non-empty section. An empty document renders to "".
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String, TemplateError> {
        let mut rendered = String::new();
        rendered.push_str(&self.warnings.render(renderer)?);
        rendered.push_str(&self.getting_started.render(renderer)?);
        for section in &self.sections {
            rendered.push_str(&section.render(renderer)?);
        }
        rendered.push_str(&self.next_steps.render(renderer)?);
        Ok(rendered)
    }

    /// Render the document into `out`.
    pub fn write<W: Write>(&self, renderer: &TemplateRenderer, out: &mut W) -> Result<()> {
        let rendered = self.render(renderer)?;
        out.write_all(rendered.as_bytes()).context("Failed to write help document")?;
        Ok(())
    }
}

impl fmt::Debug for HelpDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpDocument")
            .field("warnings", &self.warnings)
            .field("getting_started", &self.getting_started)
            .field("sections", &self.sections.len())
            .field("next_steps", &self.next_steps)
            .finish()
    }
}
