//! Dependency metadata: the records a catalog is made of.
//!
//! A catalog groups [`Dependency`] records; each dependency carries an
//! ordered list of [`Link`]s that point to its documentation. The `rel` of a
//! link decides which part of the generated help document it belongs to, see
//! [`LinkCategory`].
//!
//! # Catalog Format
//!
//! ```toml
//! [[groups]]
//! name = "Web"
//!
//! [[groups.dependencies]]
//! id = "web"
//! name = "Spring Web"
//! group-id = "org.springframework.boot"
//! artifact-id = "spring-boot-starter-web"
//!
//! [[groups.dependencies.links]]
//! rel = "guide"
//! href = "https://spring.io/guides/gs/rest-service/"
//! description = "Building a RESTful Web Service"
//!
//! [[groups.dependencies.links]]
//! rel = "reference"
//! href = "https://docs.spring.io/spring-boot/{bootVersion}/reference/web/servlet.html"
//! ```

pub mod catalog;

#[cfg(test)]
mod metadata_tests;

pub use catalog::{DependencyGroup, InitializrMetadata};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// `{name}` placeholder in a link href; braces never nest.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// Documentation link category.
///
/// Only the exact rels `reference` and `guide` are special; every other rel
/// (`home`, `sample`, custom values) is an additional link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkCategory {
    /// Reference documentation (`rel = "reference"`)
    Reference,
    /// Guides and tutorials (`rel = "guide"`)
    Guide,
    /// Anything else
    Other,
}

impl LinkCategory {
    /// All categories, in the order they appear in a help document.
    pub const ALL: [LinkCategory; 3] = [LinkCategory::Reference, LinkCategory::Guide, LinkCategory::Other];

    /// Classify a link rel.
    #[must_use]
    pub fn from_rel(rel: &str) -> Self {
        match rel {
            "reference" => LinkCategory::Reference,
            "guide" => LinkCategory::Guide,
            _ => LinkCategory::Other,
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkCategory::Reference => write!(f, "reference"),
            LinkCategory::Guide => write!(f, "guide"),
            LinkCategory::Other => write!(f, "other"),
        }
    }
}

/// A documentation link attached to a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation of the link, e.g. `reference` or `guide`
    pub rel: String,
    /// Target URL, possibly with `{variable}` placeholders
    pub href: String,
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Link {
    /// Create a link without a description.
    pub fn create(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            description: None,
        }
    }

    /// Create a link with a description.
    pub fn with_description(
        rel: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            description: Some(description.into()),
        }
    }

    #[must_use]
    pub fn category(&self) -> LinkCategory {
        LinkCategory::from_rel(&self.rel)
    }

    /// The explicit description, ignoring blank values.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Whether the href contains at least one `{variable}` placeholder.
    #[must_use]
    pub fn is_templated(&self) -> bool {
        PLACEHOLDER.is_match(&self.href)
    }

    /// Expand `{variable}` placeholders in the href.
    ///
    /// Unknown placeholders are kept verbatim.
    #[must_use]
    pub fn expand(&self, variables: &BTreeMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(&self.href, |caps: &Captures<'_>| match variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    tracing::warn!("No value for placeholder '{}' in link {}", &caps[0], self.href);
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

/// A dependency that a generated project may include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dependency {
    /// Identifier, unique within a catalog
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description of what the dependency provides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Maven group id
    #[serde(default)]
    pub group_id: String,
    /// Maven artifact id
    #[serde(default)]
    pub artifact_id: String,
    /// Explicit version, when not managed by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Documentation links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Dependency {
    /// Create a dependency with the given id and coordinates.
    pub fn with_id(
        id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            links: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a link.
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// The display name, falling back to the id when no name is set.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }

    /// Links of `category`, in declaration order.
    pub fn links_for(&self, category: LinkCategory) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| link.category() == category)
    }
}
