//! Writes HELP.md into a generated project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::customizer::HelpDocumentCustomizer;
use super::help_document::HelpDocument;
use crate::templating::TemplateRenderer;

/// File name of the generated help document.
pub const HELP_DOCUMENT_FILE: &str = "HELP.md";

/// Builds a help document from a list of customizers and writes it out.
///
/// Customizers run in registration order on a fresh document each time.
pub struct HelpDocumentContributor<'a> {
    renderer: &'a TemplateRenderer,
    customizers: Vec<Box<dyn HelpDocumentCustomizer + 'a>>,
}

impl<'a> HelpDocumentContributor<'a> {
    pub fn new(renderer: &'a TemplateRenderer) -> Self {
        Self {
            renderer,
            customizers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_customizer(mut self, customizer: impl HelpDocumentCustomizer + 'a) -> Self {
        self.customizers.push(Box::new(customizer));
        self
    }

    /// Create a document and apply every customizer to it.
    #[must_use]
    pub fn build(&self) -> HelpDocument {
        let mut document = HelpDocument::new();
        for customizer in &self.customizers {
            customizer.customize(&mut document);
        }
        document
    }

    /// Render the document, or `None` when no customizer added anything.
    pub fn render(&self) -> Result<Option<String>> {
        let document = self.build();
        if document.is_empty() {
            return Ok(None);
        }
        Ok(Some(document.render(self.renderer)?))
    }

    /// Write `HELP.md` into `project_root`.
    ///
    /// Nothing is written for an empty document. Returns the written path.
    pub fn contribute(&self, project_root: &Path) -> Result<Option<PathBuf>> {
        let Some(rendered) = self.render()? else {
            tracing::debug!("Help document is empty, skipping {}", HELP_DOCUMENT_FILE);
            return Ok(None);
        };

        std::fs::create_dir_all(project_root).with_context(|| {
            format!("Failed to create project directory {}", project_root.display())
        })?;
        let path = project_root.join(HELP_DOCUMENT_FILE);
        std::fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Wrote {}", path.display());
        Ok(Some(path))
    }
}
