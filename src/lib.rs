//! notifygen: scaffolds notifier modules and their tests inside a context.
//!
//! The pipeline runs `core::arg_parser` → `core::validator` →
//! `core::context_resolver` → `core::file_plan`, then hands the plan to the
//! `system` collaborators that prompt for conflicts and render templates.

include!(concat!(env!("OUT_DIR"), "/messages.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
