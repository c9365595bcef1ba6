// src/core/generator.rs

//! # Run Orchestrator
//!
//! Drives a single generator run through its linear states:
//!
//! 1. **Guard**: umbrella roots are rejected before any argument is read.
//! 2. **Build**: arguments are parsed, validated and resolved into the
//!    context and notifier descriptors.
//! 3. **Plan**: the output files are computed.
//! 4. **Prompt**: if planned files already exist, the prompter decides
//!    whether the run continues.
//! 5. **Emit**: templates are rendered and written.
//!
//! Every failure is returned as a [`GenError`]; nothing here exits the process.

use crate::{
    constants::NOTIFIER_SUFFIX,
    core::{
        arg_parser, context_resolver, file_plan, inflector, paths,
        project::{Project, ProjectError},
        validator,
    },
    models::{AppName, Bindings, ContextDescriptor, FileDescriptor, NotifierDescriptor, Options},
    system::{
        copier::{CopyError, CopyOutcome, TemplateCopier},
        prompter::{self, ConflictPrompter, PromptDecision, PromptError},
    },
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error(
        "Umbrella projects are not supported. Run notifygen from inside one of the applications of '{0}'."
    )]
    UnsupportedProjectLayout(String),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    InvalidIdentifier(String),
    #[error("{0}")]
    InvalidMessageName(String),
    #[error("Operation cancelled by user.")]
    Cancelled,
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("Template Error: {0}")]
    Template(String),
    #[error("Filesystem Error: could not write '{path}': {source}")]
    IoFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Errors caused by the arguments themselves. These are reported together
    /// with the usage help.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_) | Self::InvalidIdentifier(_) | Self::InvalidMessageName(_)
        )
    }
}

impl From<CopyError> for GenError {
    fn from(err: CopyError) -> Self {
        match err {
            CopyError::Io { path, source } => Self::IoFailure { path, source },
            CopyError::Prompt(e) => Self::Prompt(e),
            e @ (CopyError::TemplateNotFound(_) | CopyError::Render { .. }) => {
                Self::Template(e.to_string())
            }
        }
    }
}

/// The descriptors a validated invocation resolves to.
#[derive(Debug, Clone)]
pub struct BuiltNotifier {
    pub options: Options,
    pub context: ContextDescriptor,
    pub notifier: NotifierDescriptor,
    /// Option tokens that were not recognized and were ignored.
    pub ignored: Vec<String>,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedNotifier {
    pub context: ContextDescriptor,
    pub notifier: NotifierDescriptor,
    pub files: Vec<CopyOutcome>,
    /// Option tokens that were not recognized and were ignored.
    pub ignored: Vec<String>,
    /// Mailer module the notifier delivers through.
    pub mailer_module: String,
    /// Application that owns the context, and so the mailer.
    pub otp_app: AppName,
    /// True when the project has no mailer module yet.
    pub mailer_missing: bool,
}

/// Parses, validates and resolves the raw arguments.
pub fn build(args: &[String], project: &Project) -> Result<BuiltNotifier, GenError> {
    let parsed = arg_parser::parse(args);
    let valid = validator::validate_args(&parsed.positional, &project.base_module)?;
    let context = context_resolver::resolve(valid.context, &parsed.options, project)?;

    let alias = format!("{}{}", inflector::module_alias(valid.notifier), NOTIFIER_SUFFIX);
    let notifier = NotifierDescriptor {
        name: valid.notifier.to_string(),
        module: format!("{}.{}{}", context.module, valid.notifier, NOTIFIER_SUFFIX),
        alias,
        inflections: inflector::inflect(valid.notifier),
        messages: valid.messages.to_vec(),
    };

    Ok(BuiltNotifier {
        options: parsed.options,
        context,
        notifier,
        ignored: parsed.invalid,
    })
}

/// Values handed to the templates.
pub fn bindings(built: &BuiltNotifier, project: &Project) -> Bindings {
    let mailer_module = project.mailer_module(&built.context);
    Bindings {
        context: built.context.clone(),
        notifier: built.notifier.clone(),
        notifier_messages: built.notifier.messages.clone(),
        base_module: built.context.base_module.clone(),
        mailer_alias: inflector::module_alias(&mailer_module).to_string(),
        mailer_module,
        opts: built.options.clone(),
    }
}

/// Runs the generator against a project, asking `prompter` about conflicts.
pub struct Generator<'a> {
    project: &'a Project,
    prompter: &'a mut dyn ConflictPrompter,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, prompter: &'a mut dyn ConflictPrompter) -> Self {
        Self { project, prompter }
    }

    /// Executes the whole run for the raw CLI arguments.
    pub fn run(&mut self, args: &[String]) -> Result<GeneratedNotifier, GenError> {
        // --- 1. Guard ---
        if self.project.is_umbrella() {
            return Err(GenError::UnsupportedProjectLayout(
                self.project.root.display().to_string(),
            ));
        }

        // --- 2. Build ---
        let built = build(args, self.project)?;
        for option in &built.ignored {
            log::debug!("Ignoring option '{}'", option);
        }

        // --- 3. Plan ---
        let files = file_plan::files_to_be_generated(&built.context, &built.notifier);
        log::debug!("File plan: {:?}", files);

        // --- 4. Prompt ---
        self.prompt_for_conflicts(&files)?;

        // --- 5. Emit ---
        let copier = TemplateCopier::new(&self.project.root);
        let roots = paths::template_roots(self.project);
        let template_bindings = bindings(&built, self.project);
        let outcomes = copier.copy(&roots, &template_bindings, &files, self.prompter)?;

        let mailer_missing = !self.project.has_mailer(&built.context);
        Ok(GeneratedNotifier {
            otp_app: built.context.context_app.clone(),
            context: built.context,
            notifier: built.notifier,
            files: outcomes,
            ignored: built.ignored,
            mailer_module: template_bindings.mailer_module,
            mailer_missing,
        })
    }

    fn prompt_for_conflicts(&mut self, files: &[FileDescriptor]) -> Result<(), GenError> {
        let conflicts = prompter::find_conflicts(&self.project.root, files);
        if conflicts.is_empty() {
            return Ok(());
        }
        match self.prompter.prompt(&conflicts)? {
            PromptDecision::Continue => Ok(()),
            PromptDecision::Abort => Err(GenError::Cancelled),
        }
    }
}
