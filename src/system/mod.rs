//! # System Interaction Layer
//!
//! The boundary between the generator's pure planning logic and the user's
//! terminal and filesystem.
//!
//! ## Modules
//!
//! - **`prompter`**: Detects planned files that already exist and asks the user
//!   whether to continue and which files to overwrite.
//! - **`copier`**: Looks templates up across the template roots, renders them
//!   and writes the results under the project root.

pub mod copier;
pub mod prompter;
