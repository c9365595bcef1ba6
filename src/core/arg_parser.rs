// src/core/arg_parser.rs

use crate::models::{AppName, Options};

/// The type a recognized option expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchKind {
    Boolean,
    Text,
}

/// Options the generator understands, by their canonical (underscored) name.
const SWITCHES: &[(&str, SwitchKind)] = &[
    ("context", SwitchKind::Boolean),
    ("context_app", SwitchKind::Text),
    ("prefix", SwitchKind::Text),
];

/// The raw invocation split into its three parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Defaults merged with every recognized option.
    pub options: Options,
    /// Positional tokens in the order given.
    pub positional: Vec<String>,
    /// Option tokens that were unknown or malformed, as written.
    pub invalid: Vec<String>,
}

fn find_switch(name: &str) -> Option<SwitchKind> {
    let canonical = name.replace('-', "_");
    SWITCHES
        .iter()
        .find(|(switch, _)| *switch == canonical)
        .map(|(_, kind)| *kind)
}

/// Splits the raw CLI tokens into options, positional arguments and invalid
/// option tokens.
///
/// # Logic:
/// - `--name=value` and `--name value` both set a text option.
/// - `--name` sets a boolean to true, `--no-name` sets it to false and
///   `--name=true|false` sets it explicitly.
/// - `-` and `_` are interchangeable inside option names.
/// - Anything else starting with `-` is collected as invalid. Invalid tokens
///   never swallow the token that follows them.
/// - A bare `--` ends option parsing.
pub fn parse(tokens: &[String]) -> ParsedInvocation {
    let mut parsed = ParsedInvocation::default();
    let mut tokens_iter = tokens.iter().map(String::as_str).peekable();

    while let Some(token) = tokens_iter.next() {
        if token == "--" {
            parsed.positional.extend(tokens_iter.by_ref().map(str::to_string));
            break;
        }

        let Some(body) = token.strip_prefix("--") else {
            if token.len() > 1 && token.starts_with('-') {
                // Short aliases are not supported.
                parsed.invalid.push(token.to_string());
            } else {
                parsed.positional.push(token.to_string());
            }
            continue;
        };

        let (name, inline_value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        match (find_switch(name), inline_value) {
            (Some(SwitchKind::Boolean), None) => set_boolean(&mut parsed.options, name, true),
            (Some(SwitchKind::Boolean), Some(value)) => match value {
                "true" => set_boolean(&mut parsed.options, name, true),
                "false" => set_boolean(&mut parsed.options, name, false),
                _ => parsed.invalid.push(token.to_string()),
            },
            (Some(SwitchKind::Text), Some(value)) => {
                set_text(&mut parsed.options, name, value);
            }
            (Some(SwitchKind::Text), None) => {
                // The value is the next token, unless it looks like another option.
                match tokens_iter.next_if(|next| !next.starts_with("--")) {
                    Some(value) => set_text(&mut parsed.options, name, value),
                    None => parsed.invalid.push(token.to_string()),
                }
            }
            (None, None) => match name.strip_prefix("no-").or_else(|| name.strip_prefix("no_")) {
                Some(negated) if find_switch(negated) == Some(SwitchKind::Boolean) => {
                    set_boolean(&mut parsed.options, negated, false);
                }
                _ => parsed.invalid.push(token.to_string()),
            },
            (None, Some(_)) => parsed.invalid.push(token.to_string()),
        }
    }

    log::debug!(
        "Parsed invocation: options={:?}, positional={:?}, invalid={:?}",
        parsed.options,
        parsed.positional,
        parsed.invalid
    );
    parsed
}

fn set_boolean(options: &mut Options, name: &str, value: bool) {
    if name.replace('-', "_") == "context" {
        options.context = value;
    }
}

fn set_text(options: &mut Options, name: &str, value: &str) {
    match name.replace('-', "_").as_str() {
        "context_app" => options.context_app = Some(AppName::from(value)),
        "prefix" => options.prefix = Some(value.to_string()),
        _ => {}
    }
}

// MARK: --- UNIT TESTS ---
