//! Bash install script generation: embedded manifest functions, template
//! getter functions, and the skeleton assembler.

pub mod assembler;
pub mod manifest_functions;
pub mod template_functions;

pub use assembler::{ScriptParts, assemble, script_file_name};
