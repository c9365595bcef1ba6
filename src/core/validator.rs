// src/core/validator.rs

use crate::core::{context_resolver, generator::GenError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// ASCII only: module names with accents or non-latin digits do not compile.
    static ref NOTIFIER_NAME: Regex =
        Regex::new(r"^[A-Z][A-Za-z0-9_]*(\.[A-Z][A-Za-z0-9_]*)*$").expect("valid regex");
    static ref MESSAGE_NAME: Regex = Regex::new(r"^[a-z]+(_[a-z0-9]+)*$").expect("valid regex");
}

/// The positional arguments, split into their roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorArgs<'a> {
    pub context: &'a str,
    pub notifier: &'a str,
    pub messages: &'a [String],
}

/// `User`, `User.Admin`; not `user` or `User-Admin`.
pub fn valid_notifier(name: &str) -> bool {
    NOTIFIER_NAME.is_match(name)
}

/// `welcome_user`, `step_2`; not `Welcome`, `welcome-user` or `1welcome`.
pub fn valid_message(name: &str) -> bool {
    MESSAGE_NAME.is_match(name)
}

/// Checks the shape of the positional arguments without looking at their
/// content: a context, a notifier, then any number of messages.
pub fn split_args(positional: &[String]) -> Result<GeneratorArgs<'_>, GenError> {
    match positional {
        [context, notifier, messages @ ..] => Ok(GeneratorArgs {
            context,
            notifier,
            messages,
        }),
        _ => Err(GenError::InvalidArguments(
            t!("validation.error.invalid_arguments").to_string(),
        )),
    }
}

/// Validates the positional arguments against the naming rules.
///
/// Rules run in a fixed order and the first failing one is reported:
/// context name, notifier name, collisions with the application's base
/// module, and finally the message names. Every invalid message is reported
/// at once.
pub fn validate_args<'a>(
    positional: &'a [String],
    base_module: &str,
) -> Result<GeneratorArgs<'a>, GenError> {
    let args = split_args(positional)?;

    if !context_resolver::valid_context_name(args.context) {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.invalid_context"),
            name = args.context
        )));
    }

    if !valid_notifier(args.notifier) {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.invalid_notifier"),
            name = args.notifier
        )));
    }

    if args.context == base_module {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.context_is_base"),
            name = args.context
        )));
    }

    if args.notifier == base_module {
        return Err(GenError::InvalidIdentifier(format!(
            t!("validation.error.notifier_is_base"),
            name = args.notifier
        )));
    }

    let invalid_messages: Vec<&str> = args
        .messages
        .iter()
        .map(String::as_str)
        .filter(|message| !valid_message(message))
        .collect();
    if !invalid_messages.is_empty() {
        return Err(GenError::InvalidMessageName(format!(
            t!("validation.error.invalid_messages"),
            notifier = args.notifier,
            names = invalid_messages.join(", ")
        )));
    }

    Ok(args)
}
