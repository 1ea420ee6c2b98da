//! Customizers that populate a [`HelpDocument`].
//!
//! A customizer only mutates the document it is given. It performs no I/O
//! and cannot fail; anything that may go wrong (unknown ids, broken
//! templates) is dealt with before customization or at render time.

use std::collections::BTreeMap;

use super::help_document::HelpDocument;
use crate::metadata::{Dependency, InitializrMetadata, LinkCategory};
use crate::project::{BuildSystem, ProjectDescription};

/// Contributes content to a help document.
pub trait HelpDocumentCustomizer {
    fn customize(&self, document: &mut HelpDocument);
}

/// Adds the documentation links of every requested dependency.
///
/// For each dependency and each [`LinkCategory`], a link is added only when
/// the dependency has exactly one link of that category. The entry uses the
/// link's description, or the dependency's display name when the link has
/// none. With several links of the same category there is no single name to
/// fall back on, so that category is skipped for that dependency.
pub struct RequestedDependenciesHelpDocumentCustomizer<'a> {
    description: &'a ProjectDescription,
    metadata: &'a InitializrMetadata,
}

impl<'a> RequestedDependenciesHelpDocumentCustomizer<'a> {
    pub fn new(description: &'a ProjectDescription, metadata: &'a InitializrMetadata) -> Self {
        Self {
            description,
            metadata,
        }
    }

    fn handle_dependency(
        &self,
        document: &mut HelpDocument,
        dependency: &Dependency,
        variables: &BTreeMap<String, String>,
    ) {
        let getting_started = document.getting_started_mut();
        for category in LinkCategory::ALL {
            let mut links = dependency.links_for(category);
            match (links.next(), links.next()) {
                (Some(link), None) => {
                    let description =
                        link.description().unwrap_or_else(|| dependency.display_name());
                    getting_started.add_link(category, link.expand(variables), description);
                }
                (Some(_), Some(_)) => tracing::debug!(
                    "Skipping {} links of '{}': {} links, none selected",
                    category,
                    dependency.id,
                    dependency.links_for(category).count()
                ),
                _ => {}
            }
        }
    }
}

impl HelpDocumentCustomizer for RequestedDependenciesHelpDocumentCustomizer<'_> {
    fn customize(&self, document: &mut HelpDocument) {
        let variables = self.description.link_variables();
        for id in self.description.requested_dependencies() {
            match self.metadata.get_dependency(id) {
                Some(dependency) => self.handle_dependency(document, dependency, &variables),
                None => tracing::debug!("Dependency '{}' is not in the catalog, no links added", id),
            }
        }
    }
}

/// Adds the official documentation of the project's build system.
pub struct BuildSystemHelpDocumentCustomizer<'a> {
    description: &'a ProjectDescription,
}

impl<'a> BuildSystemHelpDocumentCustomizer<'a> {
    pub fn new(description: &'a ProjectDescription) -> Self {
        Self {
            description,
        }
    }
}

impl HelpDocumentCustomizer for BuildSystemHelpDocumentCustomizer<'_> {
    fn customize(&self, document: &mut HelpDocument) {
        let getting_started = document.getting_started_mut();
        match self.description.build_system() {
            Some(BuildSystem::Maven) => {
                getting_started.add_reference_doc_link(
                    "https://maven.apache.org/guides/index.html",
                    "Official Apache Maven documentation",
                );
            }
            Some(BuildSystem::Gradle) => {
                getting_started.add_reference_doc_link(
                    "https://docs.gradle.org",
                    "Official Gradle documentation",
                );
                getting_started.add_additional_link(
                    "https://docs.gradle.org/current/userguide/command_line_interface.html",
                    "Gradle Build Tool command line interface",
                );
            }
            None => {}
        }
    }
}

impl<F> HelpDocumentCustomizer for F
where
    F: Fn(&mut HelpDocument),
{
    fn customize(&self, document: &mut HelpDocument) {
        self(document);
    }
}
