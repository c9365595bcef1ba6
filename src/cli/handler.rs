// src/cli/handler.rs

use crate::{
    cli::reporter::{Reporter, render_error},
    core::{
        generator::{GenError, GeneratedNotifier, Generator},
        project::Project,
    },
    system::prompter::ConflictPrompter,
};
use std::path::Path;

/// Exit code of a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code of a failed run.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the user declines to continue.
pub const EXIT_CANCELLED: i32 = 130;

/// Runs the generator for the project containing `cwd` and reports the
/// outcome. Returns the process exit code.
pub fn handle(
    args: &[String],
    cwd: &Path,
    prompter: &mut dyn ConflictPrompter,
    reporter: &mut dyn Reporter,
) -> i32 {
    match generate(args, cwd, prompter) {
        Ok(generated) => {
            report_success(&generated, reporter);
            EXIT_SUCCESS
        }
        Err(GenError::Cancelled) => {
            reporter.warn(t!("common.cancelled"));
            EXIT_CANCELLED
        }
        Err(e) => {
            log::debug!("Generator failed: {:?}", e);
            reporter.error(&render_error(&e));
            EXIT_FAILURE
        }
    }
}

fn generate(
    args: &[String],
    cwd: &Path,
    prompter: &mut dyn ConflictPrompter,
) -> Result<GeneratedNotifier, GenError> {
    let project = Project::discover(cwd)?;
    log::info!(
        "Project '{}' found at '{}'.",
        project.app,
        project.root.display()
    );
    Generator::new(&project, prompter).run(args)
}

fn report_success(generated: &GeneratedNotifier, reporter: &mut dyn Reporter) {
    for option in &generated.ignored {
        reporter.warn(&format!(
            t!("validation.warning.ignored_option"),
            option = option
        ));
    }
    for outcome in &generated.files {
        reporter.status(outcome);
    }
    reporter.info(&format!(
        t!("common.success"),
        module = generated.notifier.module,
        count = generated.notifier.messages.len()
    ));

    if generated.mailer_missing {
        reporter.info(&format!(
            t!("mailer.instructions"),
            mailer = generated.mailer_module,
            app = generated.otp_app
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::FileDescriptor,
        system::{
            copier::CopyOutcome,
            prompter::{PromptDecision, PromptError},
        },
    };
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CapturingReporter {
        statuses: Vec<String>,
        infos: Vec<String>,
        warnings: Vec<String>,
        errors: Vec<String>,
    }

    impl Reporter for CapturingReporter {
        fn status(&mut self, outcome: &CopyOutcome) {
            self.statuses.push(crate::cli::reporter::status_line(outcome));
        }
        fn info(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }
        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    struct Answer(PromptDecision);

    impl ConflictPrompter for Answer {
        fn prompt(&mut self, _: &[FileDescriptor]) -> Result<PromptDecision, PromptError> {
            Ok(self.0)
        }
        fn confirm_overwrite(&mut self, _: &Path) -> Result<bool, PromptError> {
            Ok(true)
        }
    }

    fn project_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("mix.exs"),
            "def project do\n  [app: :my_app]\nend\n",
        )
        .unwrap();
        dir
    }

    fn run(cwd: &Path, args: &[&str], decision: PromptDecision) -> (i32, CapturingReporter) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut reporter = CapturingReporter::default();
        let code = handle(&args, cwd, &mut Answer(decision), &mut reporter);
        (code, reporter)
    }

    #[test]
    fn test_success_reports_files_and_mailer_instructions() {
        let dir = project_dir();
        let (code, reporter) = run(
            dir.path(),
            &["Accounts", "User", "welcome", "--bogus"],
            PromptDecision::Continue,
        );

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            reporter.statuses,
            vec![
                "* creating lib/my_app/accounts/user_notifier.ex",
                "* creating test/my_app/accounts/user_notifier_test.exs",
            ]
        );
        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("--bogus"));
        assert!(reporter.infos.iter().any(|m| m.contains("MyApp.Accounts.UserNotifier")));
        assert!(
            reporter
                .infos
                .iter()
                .any(|m| m.contains("use Swoosh.Mailer, otp_app: :my_app"))
        );
        assert!(reporter.errors.is_empty());
    }

    #[test]
    fn test_no_mailer_instructions_when_mailer_exists() {
        let dir = project_dir();
        fs::create_dir_all(dir.path().join("lib/my_app")).unwrap();
        fs::write(dir.path().join("lib/my_app/mailer.ex"), "").unwrap();

        let (code, reporter) = run(dir.path(), &["Accounts", "User"], PromptDecision::Continue);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(!reporter.infos.iter().any(|m| m.contains("Swoosh.Mailer")));
    }

    #[test]
    fn test_runs_from_a_subdirectory() {
        let dir = project_dir();
        let nested = dir.path().join("lib/my_app");
        fs::create_dir_all(&nested).unwrap();

        let (code, _) = run(&nested, &["Accounts", "User"], PromptDecision::Continue);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(dir.path().join("lib/my_app/accounts/user_notifier.ex").is_file());
    }

    #[test]
    fn test_usage_error_exits_with_failure() {
        let dir = project_dir();
        let (code, reporter) = run(dir.path(), &["accounts", "User"], PromptDecision::Continue);
        assert_eq!(code, EXIT_FAILURE);
        assert!(reporter.errors[0].contains("\"accounts\""));
        assert!(reporter.errors[0].contains("notifygen Accounts User"));
    }

    #[test]
    fn test_missing_project_exits_with_failure() {
        let dir = TempDir::new().unwrap();
        let (code, reporter) = run(dir.path(), &["Accounts", "User"], PromptDecision::Continue);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(reporter.errors.len(), 1);
    }

    #[test]
    fn test_cancel_exits_with_130() {
        let dir = project_dir();
        let existing = dir.path().join("lib/my_app/accounts/user_notifier.ex");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "old").unwrap();

        let (code, reporter) = run(dir.path(), &["Accounts", "User"], PromptDecision::Abort);
        assert_eq!(code, EXIT_CANCELLED);
        assert!(reporter.statuses.is_empty());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
    }
}
