// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

// --- INVOCATION MODELS ---

/// Identifier of an application inside a project (`my_app`).
///
/// Any string converts into an `AppName`; whether it is a usable identifier is
/// decided later by [`AppName::is_valid`], so parsing never fails on it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AppName(String);

impl AppName {
    /// Returns the identifier as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase letters, digits and underscores, not starting with a digit.
    pub fn is_valid(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() || first == '_' => chars
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            _ => false,
        }
    }
}

impl From<&str> for AppName {
    fn from(raw: &str) -> Self {
        // `:my_app` is accepted as a spelling of `my_app`.
        let trimmed = raw.trim();
        Self(trimmed.strip_prefix(':').unwrap_or(trimmed).to_string())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recognized generator options after defaults and explicit flags are merged.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `--context` / `--no-context`.
    pub context: bool,
    /// `--context-app`: the application that owns the context.
    pub context_app: Option<AppName>,
    /// `--prefix`: project-relative path inserted before `lib/` and `test/`.
    pub prefix: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            context: true,
            context_app: None,
            prefix: None,
        }
    }
}

// --- RESOLVED DESCRIPTORS ---

/// Naming forms derived from a module name.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Inflections {
    /// Last module segment (`Sub` for `User.Sub`).
    pub alias: String,
    /// The module name as given, relative to its parent (`User.Sub`).
    pub scoped: String,
    /// Underscored path with namespaces as directories (`user/sub`).
    pub path: String,
    /// Underscored last segment (`sub`).
    pub singular: String,
    /// Human readable form of the singular (`Sub`).
    pub human: String,
}

/// Everything the generator knows about the context that owns the notifier.
/// Paths are relative to the project root.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContextDescriptor {
    /// Context name as given (`Accounts`).
    pub name: String,
    /// Fully qualified module (`MyApp.Accounts`).
    pub module: String,
    /// Last segment of the context module.
    pub alias: String,
    /// Base module of the owning application (`MyApp`).
    pub base_module: String,
    /// Underscored last segment (`accounts`).
    pub basename: String,
    /// Directory where context sources live.
    pub dir: PathBuf,
    /// Directory where context tests live.
    pub test_dir: PathBuf,
    /// Application that owns the context.
    pub context_app: AppName,
    /// Root of the owning application (empty for the project's own app).
    pub app_path: PathBuf,
    /// Prefix applied to `dir` and `test_dir`, if any.
    pub prefix: Option<String>,
    /// Value of the `context` option.
    pub generate: bool,
}

/// The notifier module being generated and the messages it delivers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NotifierDescriptor {
    /// Notifier name as given (`User`).
    pub name: String,
    /// Fully qualified module (`MyApp.Accounts.UserNotifier`).
    pub module: String,
    /// Last segment of the module (`UserNotifier`).
    pub alias: String,
    /// Inflections of the notifier name.
    pub inflections: Inflections,
    /// Message names in the order given, duplicates included.
    pub messages: Vec<String>,
}

/// How a template is turned into its destination file.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Rendered through the template engine.
    Eex,
}

/// A single planned output file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub kind: TemplateKind,
    /// Template file name inside a template root.
    pub template: String,
    /// Destination, relative to the project root.
    pub destination: PathBuf,
}

/// A place templates are looked up in, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRoot {
    /// A directory holding one file per template name.
    Dir(PathBuf),
    /// Templates embedded in the binary.
    BuiltIn,
}

/// Values exposed to templates.
#[derive(Serialize, Debug, Clone)]
pub struct Bindings {
    pub context: ContextDescriptor,
    pub notifier: NotifierDescriptor,
    pub notifier_messages: Vec<String>,
    pub base_module: String,
    pub mailer_module: String,
    pub mailer_alias: String,
    pub opts: Options,
}

// --- `notifygen.toml` MODEL ---

/// Deserialized structure of the optional `notifygen.toml` project file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Overrides the application name read from the manifest.
    pub app: Option<String>,
    /// Overrides the base module derived from the application name.
    pub base_module: Option<String>,
    /// Overrides the mailer module (`<Base>.Mailer` by default).
    pub mailer_module: Option<String>,
    /// Extra template directory, searched after `priv/templates`.
    pub templates_dir: Option<String>,
    /// Paths of other applications usable with `--context-app`.
    #[serde(default)]
    pub context_apps: HashMap<String, String>,
}
