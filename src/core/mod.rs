// src/core/mod.rs

pub mod arg_parser;
pub mod context_resolver;
pub mod file_plan;
pub mod generator;
pub mod inflector;
pub mod paths;
pub mod project;
pub mod validator;
