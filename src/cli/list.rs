//! `list` command: show the catalog with per-category link counts.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use super::CatalogArgs;
use crate::metadata::{Dependency, InitializrMetadata, LinkCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

/// One catalog entry as reported by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySummary {
    pub id: String,
    pub name: String,
    pub group: String,
    pub reference: usize,
    pub guide: usize,
    pub other: usize,
}

impl DependencySummary {
    fn new(group: &str, dependency: &Dependency) -> Self {
        let count = |category| dependency.links_for(category).count();
        Self {
            id: dependency.id.clone(),
            name: dependency.display_name().to_string(),
            group: group.to_string(),
            reference: count(LinkCategory::Reference),
            guide: count(LinkCategory::Guide),
            other: count(LinkCategory::Other),
        }
    }
}

/// Summaries of every dependency, in catalog order.
pub fn summarize(metadata: &InitializrMetadata) -> Vec<DependencySummary> {
    metadata
        .groups()
        .iter()
        .flat_map(|group| {
            group.dependencies.iter().map(|dependency| DependencySummary::new(&group.name, dependency))
        })
        .collect()
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let metadata = self.catalog.load()?;
        let summaries = summarize(&metadata);

        match self.format {
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
            ListFormat::Text => print!("{}", format_text(&summaries)),
        }
        Ok(())
    }
}

fn format_text(summaries: &[DependencySummary]) -> String {
    let mut output = String::new();
    let mut current_group: Option<&str> = None;
    for summary in summaries {
        if current_group != Some(summary.group.as_str()) {
            output.push_str(&format!("{}\n", summary.group.bold()));
            current_group = Some(summary.group.as_str());
        }
        output.push_str(&format!(
            "  {:<24} {:<32} reference: {}, guide: {}, other: {}\n",
            summary.id, summary.name, summary.reference, summary.guide, summary.other
        ));
    }
    output
}
