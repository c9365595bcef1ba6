// src/core/context_resolver.rs

use crate::{
    core::{generator::GenError, inflector, project::Project},
    models::{AppName, ContextDescriptor, Options},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    /// Context names are ASCII module aliases, optionally nested: `Accounts`, `Admin.Billing`.
    static ref CONTEXT_NAME: Regex =
        Regex::new(r"^[A-Z][A-Za-z0-9_]*(\.[A-Z][A-Za-z0-9_]*)*$").expect("valid regex");
}

/// Whether `name` can be used as a context module name.
pub fn valid_context_name(name: &str) -> bool {
    CONTEXT_NAME.is_match(name)
}

/// Resolves a validated context name and the generator options into a
/// `ContextDescriptor`. All paths in the descriptor are relative to the
/// project root.
///
/// Naming errors (context name, context app, prefix) are returned as
/// `GenError::InvalidIdentifier` so they are reported with the usage help.
pub fn resolve(
    name: &str,
    options: &Options,
    project: &Project,
) -> Result<ContextDescriptor, GenError> {
    if !valid_context_name(name) {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.invalid_context"),
            name = name
        )));
    }

    let context_app = resolve_context_app(options.context_app.as_ref(), project)?;
    let prefix = resolve_prefix(options.prefix.as_deref())?;

    // Root of the application that owns the context, relative to the project.
    let app_path = context_app_path(&context_app, project)?;
    let base = match &prefix {
        Some(prefix) => app_path.join(prefix),
        None => app_path.clone(),
    };

    let base_module = if context_app == project.app {
        project.base_module.clone()
    } else {
        inflector::camelize(context_app.as_str())
    };

    let basedir = inflector::underscore(name);
    let basename = basedir.rsplit('/').next().unwrap_or(&basedir).to_string();
    let dir = base.join("lib").join(context_app.as_str()).join(&basedir);
    let test_dir = base.join("test").join(context_app.as_str()).join(&basedir);

    let descriptor = ContextDescriptor {
        name: name.to_string(),
        module: format!("{}.{}", base_module, name),
        alias: inflector::module_alias(name).to_string(),
        base_module,
        basename,
        dir,
        test_dir,
        context_app,
        app_path,
        prefix,
        generate: options.context,
    };
    log::debug!("Resolved context: {:?}", descriptor);
    Ok(descriptor)
}

fn resolve_context_app(requested: Option<&AppName>, project: &Project) -> Result<AppName, GenError> {
    match requested {
        None => Ok(project.app.clone()),
        Some(app) if app.is_valid() => Ok(app.clone()),
        Some(app) => Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.invalid_context_app"),
            name = app
        ))),
    }
}

/// The prefix must stay inside the project: relative, without `..`.
fn resolve_prefix(prefix: Option<&str>) -> Result<Option<String>, GenError> {
    let Some(raw) = prefix else {
        return Ok(None);
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    let escapes = Path::new(trimmed)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.invalid_prefix"),
            prefix = raw
        )));
    }
    Ok(Some(trimmed.to_string()))
}

/// Where the owning application lives, relative to the project root.
///
/// The project's own application lives at the root. Other applications are
/// looked up in `[context_apps]` first, then as sibling directories.
fn context_app_path(app: &AppName, project: &Project) -> Result<PathBuf, GenError> {
    if *app == project.app {
        return Ok(PathBuf::new());
    }

    let relative = match project.config.context_apps.get(app.as_str()) {
        Some(configured) => PathBuf::from(configured),
        None => Path::new("..").join(app.as_str()),
    };

    if !project.root.join(&relative).is_dir() {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.unknown_context_app"),
            name = app,
            path = relative.display()
        )));
    }
    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::ProjectLayout;
    use crate::models::ProjectConfig;
    use std::fs;
    use tempfile::TempDir;

    fn project_at(root: &Path) -> Project {
        Project {
            root: root.to_path_buf(),
            app: AppName::from("my_app"),
            base_module: "MyApp".to_string(),
            layout: ProjectLayout::Single,
            config: ProjectConfig::default(),
        }
    }

    #[test]
    fn test_valid_context_name() {
        assert!(valid_context_name("Accounts"));
        assert!(valid_context_name("Admin.Billing"));
        assert!(!valid_context_name("accounts"));
        assert!(!valid_context_name("Admin..Billing"));
        assert!(!valid_context_name("Admin/Billing"));
        assert!(!valid_context_name("Accöunts"));
        assert!(!valid_context_name("Admin.Bílling"));
    }

    #[test]
    fn test_resolve_default_context() {
        let project = project_at(Path::new("/work/my_app"));
        let context = resolve("Accounts", &Options::default(), &project).unwrap();

        assert_eq!(context.module, "MyApp.Accounts");
        assert_eq!(context.alias, "Accounts");
        assert_eq!(context.base_module, "MyApp");
        assert_eq!(context.basename, "accounts");
        assert_eq!(context.dir, PathBuf::from("lib/my_app/accounts"));
        assert_eq!(context.test_dir, PathBuf::from("test/my_app/accounts"));
        assert_eq!(context.context_app, project.app);
        assert_eq!(context.app_path, PathBuf::new());
        assert!(context.generate);
    }

    #[test]
    fn test_resolve_nested_context_with_prefix() {
        let project = project_at(Path::new("/work/my_app"));
        let options = Options {
            context: false,
            prefix: Some("admin/".to_string()),
            ..Options::default()
        };
        let context = resolve("Admin.Billing", &options, &project).unwrap();

        assert_eq!(context.alias, "Billing");
        assert_eq!(context.basename, "billing");
        assert_eq!(context.dir, PathBuf::from("admin/lib/my_app/admin/billing"));
        assert_eq!(context.test_dir, PathBuf::from("admin/test/my_app/admin/billing"));
        assert_eq!(context.prefix.as_deref(), Some("admin"));
        assert!(!context.generate);
    }

    #[test]
    fn test_prefix_must_stay_inside_project() {
        let project = project_at(Path::new("/work/my_app"));
        for prefix in ["../elsewhere", "/abs"] {
            let options = Options {
                prefix: Some(prefix.to_string()),
                ..Options::default()
            };
            let result = resolve("Accounts", &options, &project);
            assert!(matches!(result, Err(GenError::InvalidIdentifier(_))), "{prefix}");
        }
    }

    #[test]
    fn test_invalid_context_app() {
        let project = project_at(Path::new("/work/my_app"));
        let options = Options {
            context_app: Some(AppName::from("Billing-App")),
            ..Options::default()
        };
        let err = resolve("Accounts", &options, &project).unwrap_err();
        assert!(matches!(err, GenError::InvalidIdentifier(_)));
        assert!(err.to_string().contains("Billing-App"));
    }

    #[test]
    fn test_sibling_context_app() {
        let workspace = TempDir::new().unwrap();
        let root = workspace.path().join("my_app");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(workspace.path().join("billing")).unwrap();

        let project = project_at(&root);
        let options = Options {
            context_app: Some(AppName::from("billing")),
            ..Options::default()
        };
        let context = resolve("Invoices", &options, &project).unwrap();
        assert_eq!(context.module, "Billing.Invoices");
        assert_eq!(context.app_path, PathBuf::from("../billing"));
        assert_eq!(context.dir, PathBuf::from("../billing/lib/billing/invoices"));
    }

    #[test]
    fn test_configured_context_app_path() {
        let workspace = TempDir::new().unwrap();
        fs::create_dir_all(workspace.path().join("apps/billing")).unwrap();

        let mut project = project_at(workspace.path());
        project
            .config
            .context_apps
            .insert("billing".to_string(), "apps/billing".to_string());
        let options = Options {
            context_app: Some(AppName::from("billing")),
            ..Options::default()
        };
        let context = resolve("Invoices", &options, &project).unwrap();
        assert_eq!(context.test_dir, PathBuf::from("apps/billing/test/billing/invoices"));
    }

    #[test]
    fn test_missing_context_app() {
        let workspace = TempDir::new().unwrap();
        let project = project_at(workspace.path());
        let options = Options {
            context_app: Some(AppName::from("ghost")),
            ..Options::default()
        };
        let result = resolve("Accounts", &options, &project);
        assert!(matches!(result, Err(GenError::InvalidIdentifier(_))));
    }
}
