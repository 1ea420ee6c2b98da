//! The project a help document is generated for.
//!
//! A [`ProjectDescription`] records what the user asked for: the requested
//! dependency ids (in request order, without duplicates), the platform
//! version used to expand templated links, and the build system.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::HelpError;
use crate::metadata::{Dependency, InitializrMetadata};

/// Variable name substituted with the platform version in link hrefs.
pub const PLATFORM_VERSION_VARIABLE: &str = "bootVersion";

/// Build system of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BuildSystem {
    Maven,
    Gradle,
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSystem::Maven => write!(f, "maven"),
            BuildSystem::Gradle => write!(f, "gradle"),
        }
    }
}

/// Description of a project generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescription {
    dependencies: Vec<String>,
    platform_version: Option<String>,
    build_system: Option<BuildSystem>,
}

impl ProjectDescription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a dependency. Requesting the same id twice keeps the first position.
    pub fn add_dependency(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
        self
    }

    #[must_use]
    pub fn with_dependencies<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.add_dependency(id);
        }
        self
    }

    #[must_use]
    pub fn with_platform_version(mut self, version: impl Into<String>) -> Self {
        self.platform_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_build_system(mut self, build_system: BuildSystem) -> Self {
        self.build_system = Some(build_system);
        self
    }

    /// Requested dependency ids, in request order.
    pub fn requested_dependencies(&self) -> &[String] {
        &self.dependencies
    }

    #[must_use]
    pub fn has_dependency(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }

    pub fn platform_version(&self) -> Option<&str> {
        self.platform_version.as_deref()
    }

    pub fn build_system(&self) -> Option<BuildSystem> {
        self.build_system
    }

    /// Variables available to templated link hrefs.
    #[must_use]
    pub fn link_variables(&self) -> BTreeMap<String, String> {
        let mut variables = BTreeMap::new();
        if let Some(version) = &self.platform_version {
            variables.insert(PLATFORM_VERSION_VARIABLE.to_string(), version.clone());
        }
        variables
    }

    /// Split the requested ids into catalog records and unknown ids.
    pub fn resolve<'a>(&self, metadata: &'a InitializrMetadata) -> ResolvedDependencies<'a> {
        let mut resolved = ResolvedDependencies::default();
        for id in &self.dependencies {
            match metadata.get_dependency(id) {
                Some(dependency) => resolved.known.push(dependency),
                None => resolved.unknown.push(id.clone()),
            }
        }
        resolved
    }

    /// Fail on the first requested id that the catalog does not know.
    pub fn validate(&self, metadata: &InitializrMetadata) -> Result<(), HelpError> {
        match self.resolve(metadata).unknown.into_iter().next() {
            Some(id) => Err(HelpError::UnknownDependency {
                suggestions: metadata.suggest(&id),
                id,
            }),
            None => Ok(()),
        }
    }
}

/// Outcome of resolving requested ids against a catalog.
#[derive(Debug, Default)]
pub struct ResolvedDependencies<'a> {
    /// Catalog records, in request order
    pub known: Vec<&'a Dependency>,
    /// Ids missing from the catalog, in request order
    pub unknown: Vec<String>,
}
