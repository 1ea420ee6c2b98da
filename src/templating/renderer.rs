//! Template rendering engine with Tera.
//!
//! [`TemplateRenderer`] wraps a Tera instance preloaded with the built-in
//! help document templates. A templates directory may override any built-in
//! by providing `<name>.tera`, e.g. `documentation/guides.tera`.

use std::path::Path;

use tera::{Context as TeraContext, Tera};

use super::error::TemplateError;

/// Template for the "Read Me First" warnings list.
pub const WARNINGS_TEMPLATE: &str = "documentation/warnings";
/// Template for reference documentation links.
pub const REFERENCE_DOCUMENTATION_TEMPLATE: &str = "documentation/reference-documentation";
/// Template for guide links.
pub const GUIDES_TEMPLATE: &str = "documentation/guides";
/// Template for additional links.
pub const ADDITIONAL_LINKS_TEMPLATE: &str = "documentation/additional-links";
/// Template for the "Next Steps" list.
pub const NEXT_STEPS_TEMPLATE: &str = "documentation/next-steps";

const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    (
        WARNINGS_TEMPLATE,
        "# Read Me First\n\
         The following was discovered as part of building this project:\n\
         \n\
         {% for warning in items %}* {{ warning }}\n{% endfor %}",
    ),
    (
        REFERENCE_DOCUMENTATION_TEMPLATE,
        "### Reference Documentation\n\
         For further reference, please consider the following sections:\n\
         \n\
         {% for link in items %}* [{{ link.description }}]({{ link.href }})\n{% endfor %}",
    ),
    (
        GUIDES_TEMPLATE,
        "### Guides\n\
         The following guides illustrate how to use some features concretely:\n\
         \n\
         {% for link in items %}* [{{ link.description }}]({{ link.href }})\n{% endfor %}",
    ),
    (
        ADDITIONAL_LINKS_TEMPLATE,
        "### Additional Links\n\
         These additional references should also help you:\n\
         \n\
         {% for link in items %}* [{{ link.description }}]({{ link.href }})\n{% endfor %}",
    ),
    (
        NEXT_STEPS_TEMPLATE,
        "# Next Steps\n\
         \n\
         {% for step in items %}* {{ step }}\n{% endfor %}",
    ),
];

/// Renders help document sections from named Tera templates.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with the built-in templates only.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        for (name, content) in BUILTIN_TEMPLATES {
            tera.add_raw_template(name, content).map_err(|e| TemplateError::syntax(name, &e))?;
        }
        Ok(Self {
            tera,
        })
    }

    /// Create a renderer whose built-ins may be replaced by files in `dir`.
    ///
    /// Only the known template names are looked up; other files in the
    /// directory are ignored.
    pub fn with_overrides(dir: &Path) -> Result<Self, TemplateError> {
        let mut renderer = Self::new()?;
        for (name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(format!("{name}.tera"));
            if !path.is_file() {
                continue;
            }
            tracing::debug!("Overriding template '{}' with {}", name, path.display());
            renderer
                .tera
                .add_template_file(&path, Some(name))
                .map_err(|e| TemplateError::syntax(name, &e))?;
        }
        Ok(renderer)
    }

    /// Whether a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render the template `name` with `context`.
    pub fn render(&self, name: &str, context: &TeraContext) -> Result<String, TemplateError> {
        if !self.has_template(name) {
            return Err(TemplateError::NotFound {
                name: name.to_string(),
            });
        }
        self.tera.render(name, context).map_err(|e| TemplateError::render(name, &e))
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        f.debug_struct("TemplateRenderer").field("templates", &names).finish()
    }
}
