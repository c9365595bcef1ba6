// src/core/project.rs

//! Discovery of the project the generator runs in: its root, application
//! name, base module and layout, plus the optional `notifygen.toml`.

use crate::{
    constants::{MANIFEST_FILENAME, PROJECT_CONFIG_FILENAME},
    core::inflector,
    models::{AppName, ContextDescriptor, ProjectConfig},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

lazy_static! {
    /// `app: :my_app` inside the manifest's `project/0`.
    static ref MANIFEST_APP: Regex = Regex::new(r"\bapp:\s*:([a-z_][a-z0-9_]*)").expect("valid regex");
    /// Umbrella projects declare where their applications live.
    static ref MANIFEST_APPS_PATH: Regex = Regex::new(r"\bapps_path:").expect("valid regex");
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No 'mix.exs' found in '{0}' or any of its parent directories.")]
    NotFound(String),
    #[error("Could not find the application name ('app: :name') in '{0}'.")]
    MissingAppName(String),
    #[error("Invalid 'notifygen.toml' at '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

type ProjectResult<T> = Result<T, ProjectError>;

/// Whether the project holds one application or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLayout {
    Single,
    Umbrella,
}

/// The project the generator writes into.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub app: AppName,
    pub base_module: String,
    pub layout: ProjectLayout,
    pub config: ProjectConfig,
}

impl Project {
    /// Walks up from `start` until a directory containing the manifest is found.
    pub fn discover(start: &Path) -> ProjectResult<Self> {
        let start = dunce::canonicalize(start)?;
        let root = start
            .ancestors()
            .find(|dir| dir.join(MANIFEST_FILENAME).is_file())
            .ok_or_else(|| ProjectError::NotFound(start.display().to_string()))?;
        Self::load(root)
    }

    /// Loads the project rooted at `root`, which must contain the manifest.
    pub fn load(root: &Path) -> ProjectResult<Self> {
        let manifest_path = root.join(MANIFEST_FILENAME);
        let manifest = fs::read_to_string(&manifest_path)?;
        let config = load_config(root)?;

        let layout = if MANIFEST_APPS_PATH.is_match(&manifest) {
            ProjectLayout::Umbrella
        } else {
            ProjectLayout::Single
        };

        let app_from_manifest = MANIFEST_APP
            .captures(&manifest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let app_name = match (&config.app, app_from_manifest) {
            (Some(app), _) => app.clone(),
            (None, Some(app)) => app,
            // Umbrella roots have no application of their own.
            (None, None) if layout == ProjectLayout::Umbrella => root
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            (None, None) => {
                return Err(ProjectError::MissingAppName(
                    manifest_path.display().to_string(),
                ));
            }
        };
        let app = AppName::from(app_name.as_str());

        let base_module = config
            .base_module
            .clone()
            .unwrap_or_else(|| inflector::camelize(app.as_str()));

        log::debug!(
            "Project at '{}': app={}, base_module={}, layout={:?}",
            root.display(),
            app,
            base_module,
            layout
        );

        Ok(Self {
            root: root.to_path_buf(),
            app,
            base_module,
            layout,
            config,
        })
    }

    pub fn is_umbrella(&self) -> bool {
        self.layout == ProjectLayout::Umbrella
    }

    /// The mailer module a context's notifiers deliver through.
    ///
    /// `mailer_module` from the config only applies to the project's own
    /// application; any other context app uses `<Base>.Mailer` of that app.
    pub fn mailer_module(&self, context: &ContextDescriptor) -> String {
        match &self.config.mailer_module {
            Some(configured) if context.context_app == self.app => configured.clone(),
            _ => format!("{}.Mailer", context.base_module),
        }
    }

    /// Whether the mailer's source file exists in the context's application.
    pub fn has_mailer(&self, context: &ContextDescriptor) -> bool {
        let relative = inflector::underscore(&self.mailer_module(context));
        self.root
            .join(&context.app_path)
            .join("lib")
            .join(format!("{}.ex", relative))
            .is_file()
    }
}

fn load_config(root: &Path) -> ProjectResult<ProjectConfig> {
    let path = root.join(PROJECT_CONFIG_FILENAME);
    if !path.is_file() {
        return Ok(ProjectConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|source| ProjectError::Config {
        path: path.display().to_string(),
        source,
    })
}
