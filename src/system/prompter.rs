// src/system/prompter.rs

use crate::models::FileDescriptor;
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("User Interface Error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// What to do when planned files already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptDecision {
    /// Go on and decide file by file.
    Continue,
    /// Stop the run before anything is written.
    Abort,
}

/// Asks the user how to handle files that would be overwritten.
pub trait ConflictPrompter {
    /// Called once with every planned file that already exists.
    fn prompt(&mut self, conflicts: &[FileDescriptor]) -> Result<PromptDecision, PromptError>;

    /// Called for each existing file whose content would change.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool, PromptError>;
}

/// Returns the planned files that already exist under `root`.
pub fn find_conflicts(root: &Path, files: &[FileDescriptor]) -> Vec<FileDescriptor> {
    files
        .iter()
        .filter(|file| root.join(&file.destination).exists())
        .cloned()
        .collect()
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct InteractivePrompter;

impl ConflictPrompter for InteractivePrompter {
    fn prompt(&mut self, conflicts: &[FileDescriptor]) -> Result<PromptDecision, PromptError> {
        println!("{}", t!("prompt.conflicts_header").yellow());
        for file in conflicts {
            println!("  * {}", file.destination.display());
        }

        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("prompt.proceed"))
            .default(false)
            .interact()?;

        Ok(if proceed {
            PromptDecision::Continue
        } else {
            PromptDecision::Abort
        })
    }

    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool, PromptError> {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(t!("prompt.overwrite"), path = path.display()))
            .default(false)
            .interact()?;
        Ok(overwrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn descriptor(destination: &str) -> FileDescriptor {
        FileDescriptor {
            kind: TemplateKind::Eex,
            template: "notifier.ex".to_string(),
            destination: PathBuf::from(destination),
        }
    }

    #[test]
    fn test_find_conflicts_only_returns_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib/my_app")).unwrap();
        fs::write(dir.path().join("lib/my_app/user_notifier.ex"), "old").unwrap();

        let files = vec![
            descriptor("lib/my_app/user_notifier.ex"),
            descriptor("test/my_app/user_notifier_test.exs"),
        ];
        let conflicts = find_conflicts(dir.path(), &files);
        assert_eq!(conflicts, vec![descriptor("lib/my_app/user_notifier.ex")]);
    }

    #[test]
    fn test_find_conflicts_on_clean_tree() {
        let dir = TempDir::new().unwrap();
        let files = vec![descriptor("lib/my_app/user_notifier.ex")];
        assert!(find_conflicts(dir.path(), &files).is_empty());
    }
}
