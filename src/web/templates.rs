//! Template engine
//!
//! Loads the dashboard's Tera templates from a directory at startup and
//! renders them with an explicit context. Templates use Tera inheritance,
//! so `base.html` has to be registered before the pages that extend it.

use anyhow::{Context, Result};
use std::error::Error as StdError;
use std::fs;
use std::path::Path;
use tera::{Context as TeraContext, Tera};
use thiserror::Error;

/// Template-specific errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Templates directory missing or unreadable
    #[error("Templates directory not found: {0}")]
    NotFound(String),

    /// Template registration or rendering error
    #[error("Template error: {0}")]
    TemplateError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Tera-backed template engine for the dashboard pages
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load every `.html` template under `templates_path`
    pub fn new(templates_path: &Path) -> Result<Self> {
        if !templates_path.exists() {
            return Err(
                TemplateError::NotFound(templates_path.display().to_string()).into(),
            );
        }

        let mut templates: Vec<(String, String)> = Vec::new();
        collect_templates(templates_path, templates_path, &mut templates)?;

        // Base templates must be registered before the pages extending them
        templates.sort_by(|a, b| {
            let a_is_base = a.0 == "base.html" || a.0.ends_with("/base.html");
            let b_is_base = b.0 == "base.html" || b.0.ends_with("/base.html");
            b_is_base.cmp(&a_is_base)
        });

        let mut tera = Tera::default();
        for (name, content) in templates {
            tera.add_raw_template(&name, &content).map_err(|e| {
                TemplateError::TemplateError(format!("Failed to add template {}: {}", name, e))
            })?;
        }
        tera.build_inheritance_chains().map_err(|e| {
            TemplateError::TemplateError(format!("Failed to build template inheritance: {}", e))
        })?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String> {
        self.tera.render(template, context).map_err(|e| {
            let mut error_msg = format!("Failed to render '{}': {}", template, e);
            let mut source = e.source();
            while let Some(s) = source {
                error_msg.push_str(&format!("\n  Caused by: {}", s));
                source = s.source();
            }
            TemplateError::TemplateError(error_msg).into()
        })
    }
}

/// Collect `.html` files recursively, named by their path relative to the root
fn collect_templates(
    base_path: &Path,
    current_path: &Path,
    templates: &mut Vec<(String, String)>,
) -> Result<()> {
    for entry in fs::read_dir(current_path)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_templates(base_path, &path, templates)?;
        } else if path.extension().map_or(false, |ext| ext == "html") {
            let relative_path = path.strip_prefix(base_path).map_err(|_| {
                TemplateError::TemplateError("Failed to get relative path".to_string())
            })?;
            let template_name = relative_path.to_string_lossy().replace('\\', "/");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {:?}", path))?;
            templates.push((template_name, content));
        }
    }
    Ok(())
}
