//! Loading, validation and lookup of the dependency catalog.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use super::Dependency;
use crate::core::HelpError;

/// Maximum Levenshtein distance, as a percentage of the requested id length,
/// for an id to be offered as a suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// A named group of dependencies, e.g. "Web" or "SQL".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGroup {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl DependencyGroup {
    pub fn new(name: impl Into<String>, dependencies: Vec<Dependency>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }
}

/// Read-only catalog of every dependency a project can request.
///
/// Built once, then shared by reference with everything that needs to look
/// dependencies up. Ids are indexed at construction so lookups do not scan
/// the groups.
#[derive(Debug, Clone, Default)]
pub struct InitializrMetadata {
    groups: Vec<DependencyGroup>,
    index: HashMap<String, (usize, usize)>,
}

/// On-disk shape of a catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<DependencyGroup>,
}

impl InitializrMetadata {
    /// Build a validated catalog from groups.
    ///
    /// # Errors
    ///
    /// - [`HelpError::CatalogValidationError`] for blank ids, hrefs or rels
    /// - [`HelpError::DuplicateDependency`] when an id appears twice
    pub fn from_groups(groups: Vec<DependencyGroup>) -> Result<Self, HelpError> {
        let mut metadata = Self {
            groups,
            index: HashMap::new(),
        };
        metadata.reindex()?;
        Ok(metadata)
    }

    /// Parse a catalog from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, HelpError> {
        let parsed: CatalogFile =
            toml::from_str(content).map_err(|e| HelpError::CatalogParseError {
                file: origin.to_string(),
                reason: e.message().trim().to_string(),
            })?;
        Self::from_groups(parsed.groups)
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HelpError::CatalogNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let metadata = Self::from_toml_str(&content, &path.display().to_string())?;

        tracing::debug!(
            "Loaded {} dependencies in {} groups from {}",
            metadata.index.len(),
            metadata.groups.len(),
            path.display()
        );
        Ok(metadata)
    }

    fn reindex(&mut self) -> Result<(), HelpError> {
        self.index.clear();
        for (group_idx, group) in self.groups.iter().enumerate() {
            for (dep_idx, dependency) in group.dependencies.iter().enumerate() {
                validate_dependency(dependency, &group.name)?;
                if let Some(&(first_group, _)) = self.index.get(&dependency.id) {
                    return Err(HelpError::DuplicateDependency {
                        id: dependency.id.clone(),
                        first_group: self.groups[first_group].name.clone(),
                        second_group: group.name.clone(),
                    });
                }
                self.index.insert(dependency.id.clone(), (group_idx, dep_idx));
            }
        }
        Ok(())
    }

    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    /// Every dependency, in catalog order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.groups.iter().flat_map(|group| group.dependencies.iter())
    }

    #[must_use]
    pub fn get_dependency(&self, id: &str) -> Option<&Dependency> {
        self.index
            .get(id)
            .map(|&(group_idx, dep_idx)| &self.groups[group_idx].dependencies[dep_idx])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Up to three catalog ids close to `id`, closest first.
    #[must_use]
    pub fn suggest(&self, id: &str) -> Vec<String> {
        let max_distance = (id.len() * SIMILARITY_THRESHOLD_PERCENT).div_ceil(100);
        let mut scored: Vec<_> = self
            .dependencies()
            .map(|dependency| (levenshtein(id, &dependency.id), &dependency.id))
            .filter(|(distance, _)| *distance <= max_distance)
            .collect();
        scored.sort();
        scored.into_iter().take(3).map(|(_, candidate)| candidate.clone()).collect()
    }
}

fn validate_dependency(dependency: &Dependency, group: &str) -> Result<(), HelpError> {
    if dependency.id.trim().is_empty() {
        return Err(HelpError::CatalogValidationError {
            reason: format!("dependency without an id in group '{group}'"),
        });
    }
    for link in &dependency.links {
        if link.rel.trim().is_empty() {
            return Err(HelpError::CatalogValidationError {
                reason: format!("link of dependency '{}' has no rel", dependency.id),
            });
        }
        if link.href.trim().is_empty() {
            return Err(HelpError::CatalogValidationError {
                reason: format!(
                    "'{}' link of dependency '{}' has no href",
                    link.rel, dependency.id
                ),
            });
        }
    }
    Ok(())
}
