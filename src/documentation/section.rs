//! Renderable help document sections.

use serde::Serialize;
use tera::Context as TeraContext;

use crate::templating::{TemplateError, TemplateRenderer};

/// A part of a help document.
pub trait Section {
    /// Whether the section would render nothing.
    fn is_empty(&self) -> bool;

    /// Render the section. Empty sections render to an empty string;
    /// non-empty ones end with a single blank line.
    fn render(&self, renderer: &TemplateRenderer) -> Result<String, TemplateError>;
}

/// An ordered list of items rendered through a named template.
///
/// The items are exposed to the template under `item_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletedSection<T> {
    template_name: String,
    item_name: String,
    items: Vec<T>,
}

impl<T: Serialize> BulletedSection<T> {
    pub fn new(template_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            item_name: item_name.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }
}

impl<T: Serialize> Section for BulletedSection<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn render(&self, renderer: &TemplateRenderer) -> Result<String, TemplateError> {
        if self.items.is_empty() {
            return Ok(String::new());
        }
        let mut context = TeraContext::new();
        context.insert(self.item_name.as_str(), &self.items);
        let rendered = renderer.render(&self.template_name, &context)?;
        Ok(finish_section(&rendered))
    }
}

/// Normalize trailing whitespace so every section ends with one blank line.
pub(crate) fn finish_section(rendered: &str) -> String {
    let mut section = rendered.trim_end().to_string();
    section.push_str("\n\n");
    section
}
