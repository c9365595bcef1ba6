// src/core/inflector.rs

use crate::models::Inflections;
use heck::{ToSnakeCase, ToUpperCamelCase};

/// Converts a module name into a path: `Accounts.AdminUser` -> `accounts/admin_user`.
pub fn underscore(module: &str) -> String {
    module
        .split('.')
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join("/")
}

/// Converts an application name into a module name: `my_app` -> `MyApp`.
pub fn camelize(app: &str) -> String {
    app.to_upper_camel_case()
}

/// `reset_password` -> `Reset password`.
pub fn humanize(underscored: &str) -> String {
    let spaced = underscored.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the last segment of a dotted module name.
pub fn module_alias(module: &str) -> &str {
    module.rsplit('.').next().unwrap_or(module)
}

/// Derives every naming form the templates need from a (possibly dotted)
/// module name.
pub fn inflect(name: &str) -> Inflections {
    let path = underscore(name);
    let singular = path.rsplit('/').next().unwrap_or(&path).to_string();
    Inflections {
        alias: module_alias(name).to_string(),
        scoped: name.to_string(),
        human: humanize(&singular),
        path,
        singular,
    }
}
