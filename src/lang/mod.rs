/*!
# Rust Language Module

This Rust module is the Tiny-ASM front end: source lines and the
preprocessor passes which reduce them to a flat stream of mnemonics and
numbers ready for the assembler.

*/

#[macro_use]
mod error;
mod chars;
mod comment;
mod constant;
mod diagnostics;
mod import;
mod label;
mod line;
mod preprocess;
mod subroutine;
mod token;

pub use chars::convert_chars;
pub use comment::strip_comments;
pub use constant::substitute_constants;
pub use diagnostics::{Diagnostics, Strict};
pub use error::{Category, Error, ErrorCode, Severity};
pub use import::{import, FileSystem, Source};
pub use label::resolve_labels;
pub use line::SourceLine;
pub use preprocess::Preprocessor;
pub use subroutine::expand_subroutines;
pub use token::{tokenize, Kind};
