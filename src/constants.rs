// src/constants.rs

/// The project manifest that marks a project root.
pub const MANIFEST_FILENAME: &str = "mix.exs";

/// Optional per-project configuration file (next to the manifest).
pub const PROJECT_CONFIG_FILENAME: &str = "notifygen.toml";

/// Name of the generator, used for template directories.
pub const GENERATOR_NAME: &str = "gen.notifier";

/// Project-relative directory holding template overrides for every generator.
pub const PROJECT_TEMPLATES_DIR: &str = "priv/templates";

/// Name of the per-user configuration directory (under the system config dir).
pub const USER_CONFIG_DIRNAME: &str = "notifygen";

/// Template of the notifier module.
pub const NOTIFIER_TEMPLATE: &str = "notifier.ex";

/// Template of the notifier test.
pub const NOTIFIER_TEST_TEMPLATE: &str = "notifier_test.exs";

/// Suffix appended to the notifier name to form its module.
pub const NOTIFIER_SUFFIX: &str = "Notifier";

/// Extension of the generated source file.
pub const SOURCE_EXT: &str = "ex";

/// Extension of the generated test file.
pub const TEST_EXT: &str = "exs";
