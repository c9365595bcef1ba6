// src/system/copier.rs

use crate::{
    constants::{NOTIFIER_TEMPLATE, NOTIFIER_TEST_TEMPLATE},
    models::{Bindings, FileDescriptor, TemplateKind, TemplateRoot},
    system::prompter::{ConflictPrompter, PromptError},
};
use minijinja::{Environment, UndefinedBehavior};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Templates shipped with the binary, used when no directory overrides them.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        NOTIFIER_TEMPLATE,
        include_str!("../../templates/gen.notifier/notifier.ex"),
    ),
    (
        NOTIFIER_TEST_TEMPLATE,
        include_str!("../../templates/gen.notifier/notifier_test.exs"),
    ),
];

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Template '{0}' was not found in any template directory.")]
    TemplateNotFound(String),
    #[error("Could not render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

type CopyResult<T> = Result<T, CopyError>;

/// What happened to a single destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Created,
    Overwritten,
    Identical,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Destination relative to the project root.
    pub destination: PathBuf,
    pub status: CopyStatus,
}

/// Renders templates into files under a project root.
#[derive(Debug, Clone)]
pub struct TemplateCopier {
    root: PathBuf,
}

impl TemplateCopier {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Renders every file of the plan, then writes them.
    ///
    /// Rendering happens before any write so a broken template leaves the tree
    /// untouched. Existing files with identical content are left alone; files
    /// whose content would change are only replaced if `prompter` agrees.
    pub fn copy(
        &self,
        roots: &[TemplateRoot],
        bindings: &Bindings,
        files: &[FileDescriptor],
        prompter: &mut dyn ConflictPrompter,
    ) -> CopyResult<Vec<CopyOutcome>> {
        let mut rendered = Vec::with_capacity(files.len());
        for file in files {
            let source = load_template(roots, &file.template)?;
            let content = match file.kind {
                TemplateKind::Eex => render(&file.template, &source, bindings)?,
            };
            rendered.push((file, content));
        }

        let mut outcomes = Vec::with_capacity(rendered.len());
        for (file, content) in rendered {
            outcomes.push(self.write_file(&file.destination, &content, prompter)?);
        }
        Ok(outcomes)
    }

    fn write_file(
        &self,
        destination: &Path,
        content: &str,
        prompter: &mut dyn ConflictPrompter,
    ) -> CopyResult<CopyOutcome> {
        let target = self.root.join(destination);

        let status = match fs::read(&target) {
            Ok(existing) if existing == content.as_bytes() => CopyStatus::Identical,
            Ok(_) => {
                if prompter.confirm_overwrite(destination)? {
                    write_target(&target, content)?;
                    CopyStatus::Overwritten
                } else {
                    CopyStatus::Skipped
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                write_target(&target, content)?;
                CopyStatus::Created
            }
            Err(source) => {
                return Err(CopyError::Io {
                    path: target.display().to_string(),
                    source,
                });
            }
        };

        log::debug!("{:?} {}", status, destination.display());
        Ok(CopyOutcome {
            destination: destination.to_path_buf(),
            status,
        })
    }
}

fn write_target(target: &Path, content: &str) -> CopyResult<()> {
    let io_error = |source| CopyError::Io {
        path: target.display().to_string(),
        source,
    };
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(target, content).map_err(io_error)
}

/// Returns the source of `name` from the first root that has it.
fn load_template(roots: &[TemplateRoot], name: &str) -> CopyResult<String> {
    for root in roots {
        match root {
            TemplateRoot::Dir(dir) => {
                let path = dir.join(name);
                if path.is_file() {
                    log::debug!("Using template '{}' from '{}'", name, dir.display());
                    return fs::read_to_string(&path).map_err(|source| CopyError::Io {
                        path: path.display().to_string(),
                        source,
                    });
                }
            }
            TemplateRoot::BuiltIn => {
                if let Some((_, source)) = BUILTIN_TEMPLATES.iter().find(|(n, _)| *n == name) {
                    log::debug!("Using built-in template '{}'", name);
                    return Ok((*source).to_string());
                }
            }
        }
    }
    Err(CopyError::TemplateNotFound(name.to_string()))
}

fn render(name: &str, source: &str, bindings: &Bindings) -> CopyResult<String> {
    let render_error = |source| CopyError::Render {
        name: name.to_string(),
        source,
    };

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    // A misspelled binding in a custom template is an error, not an empty string.
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(name, source).map_err(render_error)?;
    env.get_template(name)
        .and_then(|template| template.render(bindings))
        .map_err(render_error)
}
