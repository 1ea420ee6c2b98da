//! `generate` command: write HELP.md for the requested dependencies.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CatalogArgs;
use crate::documentation::{
    BuildSystemHelpDocumentCustomizer, HELP_DOCUMENT_FILE, HelpDocumentContributor,
    RequestedDependenciesHelpDocumentCustomizer,
};
use crate::metadata::InitializrMetadata;
use crate::project::{BuildSystem, ProjectDescription};
use crate::templating::TemplateRenderer;

#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Requested dependency ids (repeat the flag or separate with commas)
    #[arg(short = 'd', long = "dependency", value_delimiter = ',')]
    pub dependencies: Vec<String>,

    /// Platform version substituted for {bootVersion} in links
    #[arg(long)]
    pub platform_version: Option<String>,

    /// Build system of the generated project
    #[arg(long, value_enum)]
    pub build: Option<BuildSystem>,

    /// Directory with template overrides (e.g. documentation/guides.tera)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Project directory that receives HELP.md
    #[arg(short, long, default_value = ".", conflicts_with = "stdout")]
    pub output: PathBuf,

    /// Print the document instead of writing HELP.md
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateCommand {
    pub fn execute(self) -> Result<()> {
        let metadata = self.catalog.load()?;
        let description = self.description();
        description.validate(&metadata)?;

        let renderer = self.renderer()?;
        let contributor = Self::contributor(&renderer, &description, &metadata);

        if self.stdout {
            if let Some(rendered) = contributor.render()? {
                print!("{rendered}");
            }
            return Ok(());
        }

        match contributor.contribute(&self.output)? {
            Some(path) => println!("{} Wrote {}", "✓".green(), path.display()),
            None => println!(
                "No documentation links for the requested dependencies, {} not written",
                HELP_DOCUMENT_FILE
            ),
        }
        Ok(())
    }

    /// The project description for this invocation.
    pub fn description(&self) -> ProjectDescription {
        let mut description = ProjectDescription::new()
            .with_dependencies(self.dependencies.iter().map(|id| id.trim()).filter(|id| !id.is_empty()));
        if let Some(version) = &self.platform_version {
            description = description.with_platform_version(version.clone());
        }
        if let Some(build) = self.build {
            description = description.with_build_system(build);
        }
        description
    }

    fn renderer(&self) -> Result<TemplateRenderer> {
        let renderer = match &self.templates {
            Some(dir) => TemplateRenderer::with_overrides(dir)
                .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
            None => TemplateRenderer::new()?,
        };
        Ok(renderer)
    }

    /// Build system links first, then the links of each dependency.
    pub fn contributor<'a>(
        renderer: &'a TemplateRenderer,
        description: &'a ProjectDescription,
        metadata: &'a InitializrMetadata,
    ) -> HelpDocumentContributor<'a> {
        HelpDocumentContributor::new(renderer)
            .with_customizer(BuildSystemHelpDocumentCustomizer::new(description))
            .with_customizer(RequestedDependenciesHelpDocumentCustomizer::new(description, metadata))
    }
}
