// src/core/paths.rs

use crate::{
    constants::{GENERATOR_NAME, PROJECT_TEMPLATES_DIR, USER_CONFIG_DIRNAME},
    core::project::Project,
    models::TemplateRoot,
};
use std::path::PathBuf;

/// Returns the per-user template directory for this generator
/// (`~/.config/notifygen/templates/gen.notifier` on Linux), if the system
/// has a config directory.
pub fn user_templates_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(USER_CONFIG_DIRNAME)
            .join("templates")
            .join(GENERATOR_NAME)
    })
}

/// Expands `~` and environment variables in a configured path.
///
/// A path that cannot be expanded (e.g. an unset variable) is logged and
/// skipped rather than failing the run.
pub fn expand_path_template(template: &str) -> Option<PathBuf> {
    match shellexpand::full(template) {
        Ok(expanded) => Some(PathBuf::from(expanded.into_owned())),
        Err(e) => {
            log::warn!("Ignoring templates_dir '{}': {}", template, e);
            None
        }
    }
}

/// Template roots in lookup order: the project's `priv/templates`, the
/// configured `templates_dir`, the user's template directory and finally the
/// built-in templates.
pub fn template_roots(project: &Project) -> Vec<TemplateRoot> {
    let mut roots = vec![TemplateRoot::Dir(
        project.root.join(PROJECT_TEMPLATES_DIR).join(GENERATOR_NAME),
    )];

    if let Some(configured) = project
        .config
        .templates_dir
        .as_deref()
        .and_then(expand_path_template)
    {
        // Relative paths are relative to the project root.
        roots.push(TemplateRoot::Dir(project.root.join(configured)));
    }

    if let Some(user_dir) = user_templates_dir() {
        roots.push(TemplateRoot::Dir(user_dir));
    }

    roots.push(TemplateRoot::BuiltIn);
    roots
}
