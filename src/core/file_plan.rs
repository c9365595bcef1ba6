// src/core/file_plan.rs

use crate::{
    constants::{NOTIFIER_TEMPLATE, NOTIFIER_TEST_TEMPLATE, SOURCE_EXT, TEST_EXT},
    models::{ContextDescriptor, FileDescriptor, NotifierDescriptor, TemplateKind},
};

/// The files a notifier run produces: the notifier and its test.
///
/// Messages are rendered inside the notifier, so they never add files.
pub fn files_to_be_generated(
    context: &ContextDescriptor,
    notifier: &NotifierDescriptor,
) -> Vec<FileDescriptor> {
    let singular = &notifier.inflections.singular;
    vec![
        FileDescriptor {
            kind: TemplateKind::Eex,
            template: NOTIFIER_TEMPLATE.to_string(),
            destination: context
                .dir
                .join(format!("{}_notifier.{}", singular, SOURCE_EXT)),
        },
        FileDescriptor {
            kind: TemplateKind::Eex,
            template: NOTIFIER_TEST_TEMPLATE.to_string(),
            destination: context
                .test_dir
                .join(format!("{}_notifier_test.{}", singular, TEST_EXT)),
        },
    ]
}
